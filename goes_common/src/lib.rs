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

//! support functions shared by the GOES tiler crates: filesystem housekeeping, datetime helpers,
//! external process execution, RON config loading and (with feature `s3`) anonymous AWS S3 access

pub mod macros;
pub mod fs;
pub mod datetime;
pub mod process;
pub mod config;

#[cfg(feature="s3")]
pub mod s3;
