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

//! linear stretch of raw radiances into the byte range

use serde::Deserialize;

use crate::bands::Mode;
use crate::errors::{GoesTilerError,Result};

/// number of standard deviations above the mean where we clip highlights
pub const HI_CLIP_SIGMAS: f64 = 3.0;

/// per-band statistics as reported by `gdalinfo -stats -json`
#[derive(Debug,Clone,Copy,PartialEq,Deserialize)]
pub struct BandStats {
    pub min: f64,
    pub mean: f64,
    #[serde(rename="stdDev")]
    pub std_dev: f64,
}

#[derive(Deserialize)]
struct GdalInfo {
    bands: Vec<GdalInfoBand>
}

#[derive(Deserialize)]
struct GdalInfoBand {
    min: Option<f64>,
    mean: Option<f64>,
    #[serde(rename="stdDev")]
    std_dev: Option<f64>,
}

impl BandStats {
    /// extract the statistics of the first band from `gdalinfo -stats -json` output
    pub fn from_gdalinfo_json (source: &str, json: &str)->Result<Self> {
        let info: GdalInfo = serde_json::from_str(json)
            .map_err(|e| GoesTilerError::StatsError( source.to_string(), e.to_string()))?;
        let band = info.bands.first()
            .ok_or_else(|| GoesTilerError::StatsError( source.to_string(), "no bands".to_string()))?;

        match (band.min, band.mean, band.std_dev) {
            (Some(min), Some(mean), Some(std_dev)) if min.is_finite() && mean.is_finite() && std_dev.is_finite() => {
                Ok( BandStats{ min, mean, std_dev } )
            }
            _ => Err( GoesTilerError::StatsError( source.to_string(), "missing min/mean/stdDev".to_string()))
        }
    }
}

/// the source value range [lo,hi] that gets mapped linearly onto the output byte range
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct StretchRange {
    pub lo: f64,
    pub hi: f64,
}

impl StretchRange {
    /// raw minimum as low clip, mean + 3 sigma as high clip
    pub fn from_stats (stats: &BandStats)->Self {
        StretchRange {
            lo: stats.min,
            hi: stats.mean + HI_CLIP_SIGMAS * stats.std_dev,
        }
    }

    /// the four `-scale` values of gdal_translate: src_min src_max dst_min dst_max.
    /// The destination order is given by the mode (inverted at night)
    pub fn scale_args (&self, mode: Mode)->[String;4] {
        let (dst_lo, dst_hi) = mode.output_range();
        [ self.lo.to_string(), self.hi.to_string(), dst_lo.to_string(), dst_hi.to_string() ]
    }
}
