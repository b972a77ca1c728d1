/*
 * Copyright (c) 2024, United States Government, as represented by the
 * Administrator of the National Aeronautics and Space Administration.
 * All rights reserved.
 *
 * The ODIN - Open Data Integration Framework is licensed under the
 * Apache License, Version 2.0 (the "License"); you may not use this file
 * except in compliance with the License. You may obtain a copy of the
 * License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::{fmt, path::PathBuf};
use thiserror::Error;

use crate::pipeline::PipelineState;

pub type Result<T> = std::result::Result<T, GoesTilerError>;

#[derive(Error,Debug)]
pub enum GoesTilerError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("config file error {0}")]
    ConfigFileError( #[from] goes_common::config::ConfigError),

    #[error("AWS S3 error {0}")]
    S3Error( #[from] goes_common::s3::GoesS3Error),

    #[error("object listing for prefix {prefix} failed: {reason}")]
    ListingError { prefix: String, reason: String },

    #[error("no object found for channel(s) {}", .channels.join(","))]
    ResolutionError { channels: Vec<String> },

    #[error("failed to fetch {key} for channel {channel}: {reason}")]
    FetchError { channel: String, key: String, reason: String },

    #[error("{tool} failed after state {stage:?} with {status}: {output}")]
    ExternalToolError { stage: PipelineState, tool: String, status: String, output: String },

    #[error("no usable statistics for {0}: {1}")]
    StatsError( String, String ),
}

pub fn config_error (msg: impl ToString)->GoesTilerError {
    GoesTilerError::ConfigError(msg.to_string())
}

/// a non-fatal problem while removing artifacts of a previous run
#[derive(Debug)]
pub struct CleanupWarning {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cleanup of {:?}: {}", self.path, self.reason)
    }
}
