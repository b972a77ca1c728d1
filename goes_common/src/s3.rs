/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! support functions for public (unauthenticated) AWS S3 buckets

use std::{path::{Path,PathBuf}, io::Write, ops::Deref};
use thiserror::Error;
use aws_sdk_s3::{Client, types::Object};
use aws_config::{Region,meta::region::RegionProviderChain};
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{DateTime,Utc};

use crate::fs::{persist_temp_file,temp_file_for};

pub type S3Client = Client;

pub type Result<T> = std::result::Result<T, GoesS3Error>;

#[derive(Error,Debug)]
pub enum GoesS3Error {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("AWS S3 get object error {0}")]
    AWSS3ObjectError( #[from] aws_smithy_runtime_api::client::result::SdkError<aws_sdk_s3::operation::get_object::GetObjectError, aws_smithy_runtime_api::http::Response>),

    #[error("AWS S3 list object error {0}")]
    AWSS3ListObjectError( #[from] aws_smithy_runtime_api::client::result::SdkError<aws_sdk_s3::operation::list_objects::ListObjectsError, aws_smithy_runtime_api::http::Response>),

    #[error("AWS byte stream download error {0}")]
    AWSByteStreamError( #[from] aws_smithy_types::byte_stream::error::Error),
}

/// newtype to allow extending the S3 Object interface
#[derive(Clone,Debug)]
pub struct S3Object(Object);

impl S3Object {
    pub fn key_str (&self)->Option<&str> {
        self.0.key()
    }

    pub fn last_modified_utc (&self)->Option<DateTime<Utc>> {
        self.0.last_modified().and_then(|d| d.to_chrono_utc().ok())
    }

    pub fn size (&self)->Option<i64> {
        self.0.size()
    }
}

impl Deref for S3Object {
    type Target = Object;
    fn deref(&self) -> &Self::Target { &self.0 }
}

/// create S3 Client for given region that does not sign requests (public buckets only)
pub async fn create_s3_client (region: String) -> Result<Client> {
    let region_provider = RegionProviderChain::first_try( Region::new( region));
    let aws_config = aws_config::from_env().no_credentials().region(region_provider).load().await;
    Ok( Client::new(&aws_config) )
}

/// retrieve all objects for given bucket/prefix, following list markers until the listing is complete.
/// If there is no error this always returns a `Vec<S3Object>` in key order, but it might be empty
pub async fn get_s3_objects (client: &Client, bucket: &str, prefix: &str) -> Result<Vec<S3Object>> {
    let mut objects: Vec<S3Object> = Vec::new();
    let mut marker: Option<String> = None;

    loop {
        let mut builder = client.list_objects().bucket(bucket).prefix(prefix);
        if let Some(key) = &marker {
            builder = builder.marker(key);
        }
        let result = builder.send().await?;

        let page: Vec<S3Object> = result.contents().to_vec().into_iter().map(|o| S3Object(o)).collect();
        let last_key = page.last().and_then(|o| o.key_str()).map(|k| k.to_string());
        objects.extend( page);

        match (result.is_truncated(), last_key) {
            (Some(true), Some(key)) => marker = Some(key),
            _ => break
        }
    }

    Ok(objects)
}

/// retrieve the keys of all objects for given bucket/prefix
pub async fn get_s3_keys (client: &Client, bucket: &str, prefix: &str) -> Result<Vec<String>> {
    let objects = get_s3_objects( client, bucket, prefix).await?;
    Ok( objects.iter().filter_map(|o| o.key_str().map(|k| k.to_string())).collect() )
}

/// download the object with the given key and store it as `file_path`, replacing a previous file.
/// Nothing is stored if the download fails
pub async fn download_s3_key_to (client: &Client, bucket: &str, key: &str, file_path: &Path) -> Result<PathBuf> {
    let mut object = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;

    let mut file = temp_file_for( file_path)?;
    while let Some(bytes) = object.body.try_next().await? {
        file.write_all(&bytes)?;
    }
    persist_temp_file( file, file_path)?;
    Ok(file_path.to_path_buf())
}
