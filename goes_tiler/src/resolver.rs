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

//! picking the source object for each channel among the candidates of an hour

use std::fmt;
use serde::Serialize;

use crate::errors::{GoesTilerError,Result};

/// an object store key. Within the listing of an hour keys sort by acquisition time since the scan
/// start time is the first time field of the filename
#[derive(Debug,Clone,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn new (key: impl ToString)->Self { ObjectKey(key.to_string()) }

    pub fn as_str (&self)->&str { &self.0 }

    /// the last path element of the key
    pub fn file_name (&self)->&str {
        self.0.rsplit('/').next().unwrap_or( &self.0)
    }
}

impl From<String> for ObjectKey {
    fn from (s: String)->Self { ObjectKey(s) }
}

impl From<&str> for ObjectKey {
    fn from (s: &str)->Self { ObjectKey(s.to_string()) }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// the object chosen for a channel in the current run
#[derive(Debug,Clone,PartialEq,Eq,Serialize)]
pub struct ResolvedFile {
    pub channel: String,
    pub key: ObjectKey,
}

/// the most recent candidate whose key contains `channel`, if any
pub fn latest_match<'a> (channel: &str, candidates: &'a [ObjectKey])->Option<&'a ObjectKey> {
    candidates.iter().filter(|k| k.as_str().contains(channel)).max()
}

/// resolve each channel to the lexicographically greatest candidate key containing the channel id.
/// The result is in channel order. If any channel has no candidate we return a `ResolutionError`
/// listing all unresolved channels and no partial result
pub fn resolve<S: AsRef<str>> (channels: &[S], candidates: &[ObjectKey])->Result<Vec<ResolvedFile>> {
    let mut resolved: Vec<ResolvedFile> = Vec::with_capacity( channels.len());
    let mut missing: Vec<String> = Vec::new();

    for channel in channels {
        let channel = channel.as_ref();
        match latest_match( channel, candidates) {
            Some(key) => resolved.push( ResolvedFile{ channel: channel.to_string(), key: key.clone() }),
            None => missing.push( channel.to_string())
        }
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err( GoesTilerError::ResolutionError{ channels: missing })
    }
}
