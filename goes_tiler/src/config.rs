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

use std::{fmt, path::{Path,PathBuf}, str::FromStr};
use serde::{Deserialize,Serialize};
use chrono_tz::Tz;

use goes_common::config::load_config;
use crate::bands::BandSet;
use crate::errors::{GoesTilerError,Result,config_error};
use crate::goesr::GOES_PRODUCT;
use crate::sun::Location;
use crate::tools::GdalTools;

/// highest zoom level gdal2tiles supports for mercator profiles
pub const MAX_ZOOM_LIMIT: u8 = 24;

/// the region we crop reprojected images to. Presets refer to GeoJSON files in the spatial data dir
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum Cutline {
    Conus,
    Full,
    Path(PathBuf),
}

impl Cutline {
    pub fn path (&self, spatial_data_dir: &Path)->PathBuf {
        match self {
            Cutline::Conus => spatial_data_dir.join("conus.geojson"),
            Cutline::Full => spatial_data_dir.join("full.geojson"),
            Cutline::Path(p) => p.clone()
        }
    }
}

impl FromStr for Cutline {
    type Err = GoesTilerError;

    /// "conus" and "full" select presets, everything else is taken as a GeoJSON pathname
    fn from_str (s: &str)->Result<Self> {
        match s.trim() {
            "" => Err( config_error("empty cutline")),
            "conus" => Ok(Cutline::Conus),
            "full" => Ok(Cutline::Full),
            path => Ok(Cutline::Path( PathBuf::from(path)))
        }
    }
}

impl fmt::Display for Cutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cutline::Conus => write!(f, "conus"),
            Cutline::Full => write!(f, "full"),
            Cutline::Path(p) => write!(f, "{}", p.display())
        }
    }
}

/// the tiler configuration. All fields are optional in config files and default to tiling the
/// CONUS sector with true color by day and long wave IR by night, as seen from Seattle
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct TilerConfig {
    /// time zone in which the hour of the object listing is computed
    pub timezone: Tz,
    pub location: Location,
    pub day_bands: BandSet,
    pub night_bands: BandSet,
    pub max_zoom: u8,
    pub cutline: Cutline,

    pub bucket: String,    // e.g. "noaa-goes16"
    pub s3_region: String, // e.g. "us-east-1"
    pub product: String,   // e.g. "L1b-RadC"

    pub work_dir: PathBuf,
    pub tiles_dir: PathBuf,
    pub spatial_data_dir: PathBuf,

    pub tools: GdalTools,
}

impl Default for TilerConfig {
    fn default()->Self {
        TilerConfig {
            timezone: Tz::UTC,
            location: Location::default(),
            day_bands: BandSet::true_color(),
            night_bands: BandSet::lwir(),
            max_zoom: 8,
            cutline: Cutline::Conus,
            bucket: "noaa-goes16".to_string(),
            s3_region: "us-east-1".to_string(),
            product: GOES_PRODUCT.to_string(),
            work_dir: PathBuf::from("temp"),
            tiles_dir: PathBuf::from("tiles"),
            spatial_data_dir: PathBuf::from("resources/spatial_data"),
            tools: GdalTools::default(),
        }
    }
}

impl TilerConfig {
    /// load from RON file and validate
    pub fn load (path: impl AsRef<Path>)->Result<Self> {
        let config: TilerConfig = load_config( path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate (&self)->Result<()> {
        check_band_set( "day_bands", &self.day_bands)?;
        check_band_set( "night_bands", &self.night_bands)?;

        // night tiling works on a single cropped raster
        if !self.night_bands.is_single_band() {
            return Err( config_error( format!("night_bands has to be a single channel, got '{}'", self.night_bands)))
        }
        if self.max_zoom > MAX_ZOOM_LIMIT {
            return Err( config_error( format!("max_zoom {} exceeds {}", self.max_zoom, MAX_ZOOM_LIMIT)))
        }
        if !self.location.is_valid() {
            return Err( config_error( format!("invalid location coordinates {}", self.location)))
        }
        if self.bucket.is_empty() || self.product.is_empty() {
            return Err( config_error("bucket and product have to be set"))
        }

        // fail before anything is fetched
        let cutline = self.cutline_path();
        if !cutline.is_file() {
            return Err( config_error( format!("cutline {:?} not found", cutline)))
        }
        Ok(())
    }

    pub fn cutline_path (&self)->PathBuf {
        self.cutline.path( &self.spatial_data_dir)
    }
}

fn check_band_set (name: &str, bands: &BandSet)->Result<()> {
    match bands.len() {
        1 | 3 => Ok(()),
        n => Err( config_error( format!("{name} has to be a single channel or three (R G B) channels, got {n}")))
    }
}
