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
use chrono::{DateTime,Utc};
use chrono_tz::Tz;
use tracing::info;

use crate::bands::{BandSet,Mode};
use crate::config::TilerConfig;
use crate::goesr::{GOES16_PROJ,hour_prefix};
use crate::sun::{SunPositionProvider,TimeContext};

/// file naming within the work dir. Everything in here is transient and removed at the start of the next run
#[derive(Debug,Clone)]
pub struct WorkArea {
    dir: PathBuf,
}

impl WorkArea {
    pub fn new (dir: impl AsRef<Path>)->Self { WorkArea{ dir: dir.as_ref().to_path_buf() } }

    pub fn dir (&self)->&Path { &self.dir }

    /// downloaded source file
    pub fn nc_path (&self, channel: &str)->PathBuf { self.dir.join( format!("{channel}.nc")) }

    /// raw radiances as GeoTIFF
    pub fn tif_path (&self, channel: &str)->PathBuf { self.dir.join( format!("{channel}.tif")) }

    pub fn scaled_path (&self, channel: &str)->PathBuf { self.dir.join( format!("_scale_{channel}.tif")) }

    pub fn projected_path (&self, channel: &str)->PathBuf { self.dir.join( format!("_prj_{channel}.tif")) }

    /// reprojected and cropped byte raster of a channel
    pub fn cropped_path (&self, channel: &str)->PathBuf { self.dir.join( format!("_us_{channel}.tif")) }

    pub fn rgb_path (&self)->PathBuf { self.dir.join("rgb.tif") }
}

/// everything a pipeline run needs to know, fixed at the start of the run
#[derive(Debug,Clone)]
pub struct RunContext {
    pub config: TilerConfig,
    pub time: TimeContext,
    /// the run time in the configured time zone, which determines the listing hour
    pub listing_time: DateTime<Tz>,
    pub mode: Mode,
    pub bands: BandSet,
    pub cutline: PathBuf,
    pub work_area: WorkArea,
}

impl RunContext {
    pub fn new (config: TilerConfig, now: DateTime<Utc>, sun: &dyn SunPositionProvider)->Self {
        let time = TimeContext::new( now, &config.location, sun);
        let (mode, bands) = time.select( &config.day_bands, &config.night_bands);
        let listing_time = now.with_timezone( &config.timezone);
        let cutline = config.cutline_path();
        let work_area = WorkArea::new( &config.work_dir);

        RunContext { config, time, listing_time, mode, bands, cutline, work_area }
    }

    /// the object store prefix of all candidate files of this run
    pub fn listing_prefix (&self)->String {
        hour_prefix( &self.config.product, &self.listing_time)
    }

    pub fn log_summary (&self) {
        let loc = &self.config.location;
        info!("selecting channels for time of day: {}", self.mode);
        info!("time: {} (sunrise: {:?}, sunset: {:?})", self.time.now, self.time.sunrise, self.time.sunset);
        info!("channels: {}", self.bands);
        info!("product: {} from bucket {}", self.config.product, self.config.bucket);
        info!("projection: {}", GOES16_PROJ);
        info!("tiling levels: 0-{}", self.config.max_zoom);
        info!("cutline: {:?}", self.cutline);
        info!("location: {}/{} with timezone {}, lat: {:.02}, lng: {:.02}", loc.name(), loc.region(), loc.timezone(), loc.lat(), loc.lng());
    }
}
