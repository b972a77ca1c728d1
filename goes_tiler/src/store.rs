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

use std::path::Path;
use async_trait::async_trait;

use goes_common::s3::{S3Client,create_s3_client,get_s3_keys,download_s3_key_to};
use crate::errors::Result;
use crate::resolver::ObjectKey;

/// read-only access to the object store holding the GOES files
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// all keys starting with `prefix`
    async fn list (&self, prefix: &str)->Result<Vec<ObjectKey>>;

    /// store the content of object `key` as `path`
    async fn fetch (&self, key: &ObjectKey, path: &Path)->Result<()>;
}

/// anonymous access to a public S3 bucket such as `noaa-goes16`
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    pub async fn new (region: &str, bucket: &str)->Result<Self> {
        let client = create_s3_client( region.to_string()).await?;
        Ok( S3ObjectStore{ client, bucket: bucket.to_string() } )
    }

    pub fn client (&self)->&S3Client { &self.client }

    pub fn bucket (&self)->&str { &self.bucket }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list (&self, prefix: &str)->Result<Vec<ObjectKey>> {
        let keys = get_s3_keys( &self.client, &self.bucket, prefix).await?;
        Ok( keys.into_iter().map(ObjectKey::from).collect() )
    }

    async fn fetch (&self, key: &ObjectKey, path: &Path)->Result<()> {
        download_s3_key_to( &self.client, &self.bucket, key.as_str(), path).await?;
        Ok(())
    }
}
