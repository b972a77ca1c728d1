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

//! inspection tool that shows the candidate objects of an hour and which of them a tiler run would
//! pick for the configured day and night channels. Nothing is downloaded

use std::path::PathBuf;
use anyhow::Result;
use chrono::{DateTime,NaiveDateTime,Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use goes_common::{datetime::utc_now, s3::get_s3_objects};
use goes_tiler::{ObjectKey, RunContext, S3ObjectStore, SolarCalculator, TilerConfig, parse_filename, resolve};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show GOES-16 objects of an hour and the tiler selection among them")]
pub struct Args {
    /// pathname of RON tiler config (defaults are used if not set)
    #[arg(short,long)]
    pub config: Option<PathBuf>,

    /// UTC hour to inspect as "YYYY-MM-DDTHH" (default is now)
    #[arg(long, value_parser = parse_utc_hour)]
    pub hour: Option<DateTime<Utc>>,

    /// list all objects of the hour, not just the selection
    #[arg(short,long)]
    pub all: bool,
}

fn parse_utc_hour (s: &str)->std::result::Result<DateTime<Utc>,String> {
    NaiveDateTime::parse_from_str( &format!("{s}:00:00"), "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| format!("invalid hour '{s}': {e}"))
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => TilerConfig::load( path)?,
        None => TilerConfig::default()
    };
    let ctx = RunContext::new( config, args.hour.unwrap_or_else(utc_now), &SolarCalculator);
    let store = S3ObjectStore::new( &ctx.config.s3_region, &ctx.config.bucket).await?;

    let prefix = ctx.listing_prefix();
    let objects = get_s3_objects( store.client(), store.bucket(), &prefix).await?;
    println!("{} objects in s3://{}/{}", objects.len(), store.bucket(), prefix);

    if args.all {
        for o in &objects {
            let date = o.last_modified_utc().map(|d| d.to_string()).unwrap_or_default();
            println!("  {:<90} {:>10} {}", o.key_str().unwrap_or("?"), o.size().unwrap_or(0), date);
        }
    }

    let candidates: Vec<ObjectKey> = objects.iter().filter_map(|o| o.key_str()).map(ObjectKey::from).collect();
    println!("\nmode at {}: {} -> {}", ctx.time.now, ctx.mode, ctx.bands);

    for (label, bands) in [("day", &ctx.config.day_bands), ("night", &ctx.config.night_bands)] {
        println!("\n{label} channels {bands}:");
        match resolve( bands.channels(), &candidates) {
            Ok(resolved) => {
                for rf in resolved {
                    let start = parse_filename( rf.key.as_str()).map(|fi| fi.start_time.to_string()).unwrap_or_default();
                    println!("  {}: {} {}", rf.channel, rf.key.file_name(), start);
                }
            }
            Err(e) => println!("  {e}")
        }
    }

    Ok(())
}
