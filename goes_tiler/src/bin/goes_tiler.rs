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

//! build a tile set from the most recent GOES-16 data of the current hour.
//! Requires the GDAL command line tools (incl. gdal_merge.py and gdal2tiles.py) on the PATH

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use goes_common::datetime::utc_now;
use goes_tiler::{BandSet, Cutline, Pipeline, ProcessToolRunner, RunContext, S3ObjectStore, SolarCalculator, TilerConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "generate web map tiles from current GOES-16 ABI imagery")]
pub struct Args {
    /// pathname of RON tiler config (defaults are used if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// highest zoom level of the tile pyramid
    #[arg(long)]
    pub max_zoom: Option<u8>,

    /// "conus", "full" or pathname of a GeoJSON cutline
    #[arg(long)]
    pub cutline: Option<Cutline>,

    /// day channels, e.g. "C06 C03 C02" or a preset (natural_fire, true_color, lwir)
    #[arg(long)]
    pub day_bands: Option<BandSet>,

    /// night channel, e.g. "C16"
    #[arg(long)]
    pub night_bands: Option<BandSet>,

    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    #[arg(long)]
    pub tiles_dir: Option<PathBuf>,
}

impl Args {
    fn apply_to (self, config: &mut TilerConfig) {
        if let Some(v) = self.max_zoom { config.max_zoom = v }
        if let Some(v) = self.cutline { config.cutline = v }
        if let Some(v) = self.day_bands { config.day_bands = v }
        if let Some(v) = self.night_bands { config.night_bands = v }
        if let Some(v) = self.work_dir { config.work_dir = v }
        if let Some(v) = self.tiles_dir { config.tiles_dir = v }
    }
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = Args::parse();

    let mut config = match args.config.take() {
        Some(path) => TilerConfig::load( &path)?,
        None => TilerConfig::default()
    };
    args.apply_to( &mut config);
    config.validate()?;

    let ctx = RunContext::new( config, utc_now(), &SolarCalculator);
    let store = S3ObjectStore::new( &ctx.config.s3_region, &ctx.config.bucket).await?;
    let runner = ProcessToolRunner;

    let report = Pipeline::new( &ctx, &store, &runner).run().await?;

    println!("{} tiles from {} generated in {:?}", report.mode, report.bands, report.tiles_dir);
    for rf in &report.resolved {
        println!("  {}: {}", rf.channel, rf.key);
    }
    Ok(())
}
