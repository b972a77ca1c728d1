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

//! GOES-R object naming in the NOAA open data buckets

use std::path::Path;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use regex::Regex;
use lazy_static::lazy_static;

use goes_common::fs::filename;

/// the ABI product we tile (radiances, CONUS sector)
pub const GOES_PRODUCT: &str = "L1b-RadC";

/// the GOES-16 fixed grid projection of the ABI radiance files
pub const GOES16_PROJ: &str = "+proj=geos +lon_0=-75 +h=35786023 +x_0=0 +y_0=0 +ellps=GRS80 +units=m +no_defs +sweep=x";

/// the projection of generated tiles
pub const TILE_SRS: &str = "EPSG:3857";

lazy_static! {
    static ref FILENAME_RE: Regex = Regex::new(r#"^(?:.*/)?([A-Z]+)_([A-Z]+)-([^-_]+)-([^-_]+)-M(\d+)(C\d\d)?_G(\d+)_s(\d{14})_e(\d{14})_c(\d{14})\.(\w+)$"#).unwrap();
    static ref DTG_RE: Regex = Regex::new(r#"^(\d\d\d\d)(\d\d\d)(\d\d)(\d\d)(\d\d)(\d)$"#).unwrap();
}

/// the S3 object prefix for all objects of the given product within the hour of `dt`.
/// The hour is taken in the time zone of `dt`
pub fn hour_prefix<Tz: TimeZone> (product: &str, dt: &DateTime<Tz>)->String {
    format!("ABI-{}/{}/{:03}/{:02}", product, dt.year(), dt.ordinal(), dt.hour())
}

/// file info as encoded in object keys of the NOAA GOES buckets
/// see https://www.goes-r.gov/products/docs/PUG-L1b-vol3.pdf
/// schema:
///         «sys_env» _ «instrument» - «level» - «product» - M «mode» [C «channel»] _G «sat_id» _s «start» _e «end» _c «create» .nc
///
/// times are in UTC and specified as `yyyydddHHMMSSs` (year, day-of-year, hour, minutes, seconds, tenths of second)
///
/// example: `OR_ABI-L1b-RadC-M6C02_G16_s20241380556172_e20241380558545_c20241380559122.nc`
#[derive(Debug,Clone,PartialEq)]
pub struct GoesrFileInfo {
    pub sys_env: String,            // e.g. "OR": operational realtime
    pub instrument: String,         // e.g. "ABI"
    pub level: String,              // e.g. "L1b"
    pub product: String,            // e.g. "RadC"
    pub scan_mode: u32,             // e.g. 6
    pub channel: Option<String>,    // e.g. "C02" (only for per-channel products)
    pub sat_id: u32,                // e.g. 16
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub create_time: DateTime<Utc>,
}

/// parse GoesrFileInfo from given object key or pathname
pub fn parse_filename (path: impl AsRef<Path>)->Option<GoesrFileInfo> {
    let fname = filename( &path)?;
    let cap = FILENAME_RE.captures(fname)?;

    Some( GoesrFileInfo {
        sys_env: cap[1].to_string(),
        instrument: cap[2].to_string(),
        level: cap[3].to_string(),
        product: cap[4].to_string(),
        scan_mode: cap[5].parse().ok()?,
        channel: cap.get(6).map(|m| m.as_str().to_string()),
        sat_id: cap[7].parse().ok()?,
        start_time: parse_goesr_dtg( &cap[8])?,
        end_time: parse_goesr_dtg( &cap[9])?,
        create_time: parse_goesr_dtg( &cap[10])?,
    })
}

pub fn parse_goesr_dtg (s: &str)->Option<DateTime<Utc>> {
    let cap = DTG_RE.captures(s)?;
    let year = cap[1].parse::<i32>().ok()?;
    let doy = cap[2].parse::<u32>().ok()?;
    let hour = cap[3].parse::<u32>().ok()?;
    let min = cap[4].parse::<u32>().ok()?;
    let sec = cap[5].parse::<u32>().ok()?;
    let dec = cap[6].parse::<u32>().ok()?;

    let nd = NaiveDate::from_yo_opt( year, doy)?;
    let nt = NaiveTime::from_hms_milli_opt( hour, min, sec, dec * 100)?;
    Some( NaiveDateTime::new( nd, nt).and_utc() )
}
