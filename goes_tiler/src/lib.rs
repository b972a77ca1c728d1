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

//! web map tile pyramids from the most recent GOES-16 ABI radiances of the current hour.
//!
//! A run picks a day (RGB composite) or night (single IR band) channel set from the local solar
//! events at a configured location, resolves the latest file of each channel in the public NOAA
//! bucket, stretches and reprojects the radiances, crops them to a cutline and slices the result
//! into tiles. Raster processing is delegated to the GDAL command line tools (see [`tools`]).

pub mod errors;
pub use errors::*;

pub mod bands;
pub use bands::{BandSet,Mode,select_bands};

pub mod sun;
pub use sun::{Location,SolarCalculator,SunPositionProvider,SunTimes,TimeContext};

pub mod goesr;
pub use goesr::{GoesrFileInfo,parse_filename,hour_prefix};

pub mod resolver;
pub use resolver::{ObjectKey,ResolvedFile,resolve};

pub mod stretch;
pub use stretch::{BandStats,StretchRange};

pub mod tools;
pub use tools::{GdalTools,ProcessToolRunner,ToolRunner};

pub mod store;
pub use store::{ObjectStore,S3ObjectStore};

pub mod config;
pub use config::{Cutline,TilerConfig};

pub mod context;
pub use context::{RunContext,WorkArea};

pub mod pipeline;
pub use pipeline::{Pipeline,PipelineState,RunReport,RunState,TileSource,clean_work_dir};
