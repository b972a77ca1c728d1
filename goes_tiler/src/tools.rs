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

//! typed invocations of the GDAL command line tools we delegate raster processing to

use std::{io, path::{Path,PathBuf}};
use async_trait::async_trait;
use serde::{Deserialize,Serialize};

use goes_common::{fs::path_to_lossy_string, process::{self,ExecOutput,Invocation}};
use crate::bands::Mode;
use crate::goesr::{GOES16_PROJ,TILE_SRS};
use crate::stretch::StretchRange;

/// the netCDF variable holding the radiances
pub const RADIANCE_VAR: &str = "Rad";

/// program names (or paths) of the GDAL tools
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GdalTools {
    pub gdal_translate: String,
    pub gdalinfo: String,
    pub gdalwarp: String,
    pub gdal_merge: String,
    pub gdal2tiles: String,
}

impl Default for GdalTools {
    fn default()->Self {
        GdalTools {
            gdal_translate: "gdal_translate".to_string(),
            gdalinfo: "gdalinfo".to_string(),
            gdalwarp: "gdalwarp".to_string(),
            gdal_merge: "gdal_merge.py".to_string(),
            gdal2tiles: "gdal2tiles.py".to_string(),
        }
    }
}

impl GdalTools {
    /// extract the radiance variable of a netCDF file into a GeoTIFF
    pub fn nc_to_tiff (&self, nc_path: &Path, tif_path: &Path)->Invocation {
        Invocation::new( &self.gdal_translate)
            .arg( format!("NETCDF:{}:{}", path_to_lossy_string(nc_path), RADIANCE_VAR))
            .path_arg( tif_path)
    }

    /// (re)compute band statistics and report them as JSON on stdout
    pub fn stats (&self, tif_path: &Path)->Invocation {
        Invocation::new( &self.gdalinfo)
            .args( ["-stats", "-json"])
            .path_arg( tif_path)
    }

    /// linear stretch into a byte GeoTIFF, in the direction of the mode
    pub fn scale (&self, src: &Path, dst: &Path, range: &StretchRange, mode: Mode)->Invocation {
        Invocation::new( &self.gdal_translate)
            .args( ["-ot", "Byte", "-of", "GTiff", "-scale"])
            .args( range.scale_args(mode))
            .path_arg( src)
            .path_arg( dst)
    }

    /// warp from the GOES fixed grid into web mercator
    pub fn reproject (&self, src: &Path, dst: &Path)->Invocation {
        Invocation::new( &self.gdalwarp)
            .arg("-s_srs").arg( GOES16_PROJ)
            .arg("-t_srs").arg( TILE_SRS)
            .args( ["-r", "cubic", "-of", "GTiff"])
            .path_arg( src)
            .path_arg( dst)
    }

    /// crop to the region of interest
    pub fn crop (&self, src: &Path, dst: &Path, cutline: &Path)->Invocation {
        Invocation::new( &self.gdalwarp)
            .arg("-cutline").path_arg( cutline)
            .arg("-crop_to_cutline")
            .path_arg( src)
            .path_arg( dst)
    }

    /// stack single band rasters into one RGB raster, in the order of `inputs`
    pub fn merge_rgb (&self, inputs: &[PathBuf], dst: &Path)->Invocation {
        let mut inv = Invocation::new( &self.gdal_merge)
            .args( ["-separate", "-a_nodata", "255"])
            .arg("-o").path_arg( dst)
            .args( ["-co", "PHOTOMETRIC=RGB"]);
        for p in inputs { inv = inv.path_arg(p) }
        inv
    }

    /// slice raster into a mercator tile pyramid for zoom levels 0..=max_zoom
    pub fn tile (&self, src: &Path, tiles_dir: &Path, max_zoom: u8, mode: Mode)->Invocation {
        let mut inv = Invocation::new( &self.gdal2tiles);
        if mode.excludes_transparent_tiles() {
            inv = inv.arg("-x");
        }
        inv.args( ["-p", "mercator"])
            .arg("-z").arg( format!("0-{max_zoom}"))
            .args( ["-w", "all", "-r", "average", "-a", "0.0"])
            .path_arg( src)
            .path_arg( tiles_dir)
    }
}

/// the seam between the pipeline and the processes it launches
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// run invocation to completion. `Err` only means we could not launch or wait for the process
    async fn run (&self, invocation: &Invocation)->io::Result<ExecOutput>;
}

/// runs invocations as child processes, one at a time
#[derive(Debug,Clone,Copy,Default)]
pub struct ProcessToolRunner;

#[async_trait]
impl ToolRunner for ProcessToolRunner {
    async fn run (&self, invocation: &Invocation)->io::Result<ExecOutput> {
        process::execute( invocation).await
    }
}
