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

use std::path::{Path,PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("config file {0:?} could not be read: {1}")]
    IOError( PathBuf, std::io::Error),

    #[error("config parse error in {0:?}: {1}")]
    ParseError( PathBuf, String),
}

/// load a RON serialized config from the given path
pub fn load_config<C,P> (path: P) -> Result<C> where C: for <'a> serde::Deserialize<'a>, P: AsRef<Path> {
    let path = path.as_ref();
    let data = std::fs::read( path).map_err(|e| ConfigError::IOError( path.to_path_buf(), e))?;
    parse_config( path, data.as_slice())
}

/// parse a RON serialized config from bytes. The path is only used for error reporting
pub fn parse_config<C> (path: &Path, data: &[u8]) -> Result<C> where C: for <'a> serde::Deserialize<'a> {
    ron::de::from_bytes( data).map_err(|e| ConfigError::ParseError( path.to_path_buf(), e.to_string()))
}
