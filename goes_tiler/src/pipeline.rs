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

//! the strictly sequential tiling run: cleanup, resolve, fetch, convert, merge, tile.
//! Each step has to complete before the next one starts and every fatal error aborts the run

use std::path::{Path,PathBuf};
use regex::Regex;
use lazy_static::lazy_static;
use tracing::{debug,error,info,warn};

use goes_common::{fs::{ensure_writable_dir,remove_if_exists,remove_matching_files}, process::{ExecOutput,Invocation}};
use crate::bands::{BandSet,Mode};
use crate::context::RunContext;
use crate::errors::{CleanupWarning,GoesTilerError,Result};
use crate::goesr::parse_filename;
use crate::resolver::{ResolvedFile,resolve};
use crate::store::ObjectStore;
use crate::stretch::{BandStats,StretchRange};
use crate::tools::ToolRunner;

lazy_static! {
    // artifacts a previous run could have left in the work dir (including GDAL .aux.xml files)
    static ref ARTIFACT_RE: Regex = Regex::new(r#"\.(tif|xml|nc)$"#).unwrap();
}

/// the states of a run, in the only order they can be traversed
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord)]
pub enum PipelineState {
    Idle,
    Cleaned,
    Resolved,
    Fetched,
    Converted,
    Merged,
    Tiled,
    Done
}

impl PipelineState {
    pub fn next (&self)->Option<PipelineState> {
        use PipelineState::*;
        match self {
            Idle => Some(Cleaned),
            Cleaned => Some(Resolved),
            Resolved => Some(Fetched),
            Fetched => Some(Converted),
            Converted => Some(Merged),
            Merged => Some(Tiled),
            Tiled => Some(Done),
            Done => None
        }
    }
}

/// the per-run data that is established once the files are resolved
#[derive(Debug,Clone)]
pub struct RunState {
    pub mode: Mode,
    pub bands: BandSet,
    pub resolved: Vec<ResolvedFile>,
}

/// the raster that gets sliced into tiles
#[derive(Debug,Clone,PartialEq)]
pub enum TileSource {
    Composite(PathBuf),
    SingleBand(PathBuf),
}

impl TileSource {
    pub fn path (&self)->&Path {
        match self {
            TileSource::Composite(p) => p,
            TileSource::SingleBand(p) => p
        }
    }
}

/// what a successful run produced
#[derive(Debug)]
pub struct RunReport {
    pub mode: Mode,
    pub bands: BandSet,
    pub resolved: Vec<ResolvedFile>,
    pub tile_source: TileSource,
    pub tiles_dir: PathBuf,
    pub cleanup_warnings: Vec<CleanupWarning>,
}

/// a single tiling run. The pipeline is consumed by [`Pipeline::run`] so that a failed run has
/// to be restarted from the beginning with a new pipeline
pub struct Pipeline<'a,S,R> where S: ObjectStore + ?Sized, R: ToolRunner + ?Sized {
    ctx: &'a RunContext,
    store: &'a S,
    runner: &'a R,
    state: PipelineState,
}

impl<'a,S,R> Pipeline<'a,S,R> where S: ObjectStore + ?Sized, R: ToolRunner + ?Sized {
    pub fn new (ctx: &'a RunContext, store: &'a S, runner: &'a R)->Self {
        Pipeline { ctx, store, runner, state: PipelineState::Idle }
    }

    pub fn state (&self)->PipelineState { self.state }

    pub async fn run (mut self)->Result<RunReport> {
        self.ctx.log_summary();

        let res = self.run_states().await;
        match &res {
            Ok(report) => info!("run completed, {} tiles in {:?}", report.mode, report.tiles_dir),
            Err(e) => error!("run aborted after state {:?}: {e}", self.state)
        }
        res
    }

    async fn run_states (&mut self)->Result<RunReport> {
        let cleanup_warnings = self.clean();
        self.advance( PipelineState::Cleaned);

        let resolved = self.resolve().await?;
        self.advance( PipelineState::Resolved);

        let run_state = RunState { mode: self.ctx.mode, bands: self.ctx.bands.clone(), resolved };

        self.fetch( &run_state).await?;
        self.advance( PipelineState::Fetched);

        self.convert( &run_state).await?;
        self.advance( PipelineState::Converted);

        let tile_source = self.merge( &run_state).await?;
        self.advance( PipelineState::Merged);

        self.tile( &run_state, &tile_source).await?;
        self.advance( PipelineState::Tiled);

        self.advance( PipelineState::Done);

        Ok( RunReport {
            mode: run_state.mode,
            bands: run_state.bands,
            resolved: run_state.resolved,
            tile_source,
            tiles_dir: self.ctx.config.tiles_dir.clone(),
            cleanup_warnings
        })
    }

    fn advance (&mut self, to: PipelineState) {
        debug_assert_eq!( self.state.next(), Some(to));
        debug!("{:?} -> {:?}", self.state, to);
        self.state = to;
    }

    //--- Idle -> Cleaned

    fn clean (&self)->Vec<CleanupWarning> {
        clean_work_dir( self.ctx.work_area.dir())
    }

    //--- Cleaned -> Resolved

    async fn resolve (&self)->Result<Vec<ResolvedFile>> {
        let prefix = self.ctx.listing_prefix();
        info!("listing candidates for {prefix}");

        let candidates = self.store.list( &prefix).await
            .map_err(|e| GoesTilerError::ListingError{ prefix: prefix.clone(), reason: e.to_string() })?;
        debug!("{} candidates for {prefix}", candidates.len());

        let resolved = resolve( self.ctx.bands.channels(), &candidates)?;
        for rf in &resolved {
            match parse_filename( rf.key.as_str()) {
                Some(fi) => info!("{}: {} (scan start {})", rf.channel, rf.key, fi.start_time),
                None => info!("{}: {}", rf.channel, rf.key)
            }
        }
        Ok(resolved)
    }

    //--- Resolved -> Fetched

    async fn fetch (&self, run_state: &RunState)->Result<()> {
        for rf in &run_state.resolved {
            let path = self.ctx.work_area.nc_path( &rf.channel);
            info!("downloading {} to {:?}", rf.key, path);

            self.store.fetch( &rf.key, &path).await.map_err( |e| GoesTilerError::FetchError {
                channel: rf.channel.clone(),
                key: rf.key.to_string(),
                reason: e.to_string()
            })?;
        }
        Ok(())
    }

    //--- Fetched -> Converted

    async fn convert (&self, run_state: &RunState)->Result<()> {
        for channel in run_state.bands.iter() {
            self.convert_channel( channel, run_state.mode).await?;
        }
        Ok(())
    }

    async fn convert_channel (&self, channel: &str, mode: Mode)->Result<()> {
        let tools = &self.ctx.config.tools;
        let wa = &self.ctx.work_area;

        let nc = wa.nc_path(channel);
        let tif = wa.tif_path(channel);
        let scaled = wa.scaled_path(channel);
        let projected = wa.projected_path(channel);
        let cropped = wa.cropped_path(channel);

        info!("translating {channel} to GeoTIFF");
        self.exec( tools.nc_to_tiff( &nc, &tif)).await?;
        self.remove_intermediate( &nc);

        let output = self.exec( tools.stats( &tif)).await?;
        let stats = BandStats::from_gdalinfo_json( channel, &output.stdout)?;
        let range = StretchRange::from_stats( &stats);
        info!("{channel} ({mode}): {stats:?} -> stretch [{}, {}] to {:?}", range.lo, range.hi, mode.output_range());

        self.exec( tools.scale( &tif, &scaled, &range, mode)).await?;
        self.exec( tools.reproject( &scaled, &projected)).await?;
        self.exec( tools.crop( &projected, &cropped, &self.ctx.cutline)).await?;

        for p in [&scaled, &projected, &tif] {
            self.remove_intermediate( p);
        }
        Ok(())
    }

    //--- Converted -> Merged

    async fn merge (&self, run_state: &RunState)->Result<TileSource> {
        let wa = &self.ctx.work_area;

        if run_state.bands.is_composite() {
            info!("processing bands {} into RGB", run_state.bands);
            let inputs: Vec<PathBuf> = run_state.bands.iter().map(|c| wa.cropped_path(c)).collect();
            let rgb = wa.rgb_path();
            self.exec( self.ctx.config.tools.merge_rgb( &inputs, &rgb)).await?;
            Ok( TileSource::Composite(rgb) )

        } else {
            info!("no merging for single band");
            let channel = run_state.bands.channels().first().ok_or_else(|| GoesTilerError::ConfigError("empty band set".to_string()))?;
            Ok( TileSource::SingleBand( wa.cropped_path(channel)) )
        }
    }

    //--- Merged -> Tiled

    async fn tile (&self, run_state: &RunState, source: &TileSource)->Result<()> {
        let config = &self.ctx.config;
        info!("tiling the {} set from {:?}", run_state.mode, source.path());

        let inv = config.tools.tile( source.path(), &config.tiles_dir, config.max_zoom, run_state.mode);
        self.exec( inv).await?;
        Ok(())
    }

    //--- helpers

    /// run a tool within the current state. Failures report the last state that was completed
    async fn exec (&self, invocation: Invocation)->Result<ExecOutput> {
        let stage = self.state;
        let output = self.runner.run( &invocation).await.map_err(|e| GoesTilerError::ExternalToolError {
            stage,
            tool: invocation.program.clone(),
            status: "not executed".to_string(),
            output: e.to_string()
        })?;

        if output.success {
            if !output.stdout.is_empty() { debug!("{}: {}", invocation.program, output.stdout.trim_end()) }
            Ok(output)
        } else {
            let text = if output.stderr.trim().is_empty() { &output.stdout } else { &output.stderr };
            Err( GoesTilerError::ExternalToolError {
                stage,
                tool: invocation.program.clone(),
                status: output.status_string(),
                output: text.trim().to_string()
            })
        }
    }

    fn remove_intermediate (&self, path: &Path) {
        if let Err(e) = remove_if_exists( path) {
            warn!("could not remove {:?}: {e}", path)
        }
    }
}

/// remove whatever a previous run left in the work dir and make sure the dir exists.
/// Nothing in here is fatal, problems are returned as warnings
pub fn clean_work_dir (dir: &Path)->Vec<CleanupWarning> {
    let mut warnings: Vec<CleanupWarning> = Vec::new();
    info!("removing past run from {:?}", dir);

    if !dir.exists() {
        warnings.push( CleanupWarning{ path: dir.to_path_buf(), reason: "work dir did not exist".to_string() });
    }
    if let Err(e) = ensure_writable_dir( dir) {
        warnings.push( CleanupWarning{ path: dir.to_path_buf(), reason: format!("work dir not usable: {e}") });
        for w in &warnings { warn!("{w}") }
        return warnings
    }

    match remove_matching_files( &dir, &ARTIFACT_RE) {
        Ok(res) => {
            for p in &res.removed { debug!("removed {:?}", p) }
            if res.is_empty() {
                warnings.push( CleanupWarning{ path: dir.to_path_buf(), reason: "no artifacts of a previous run".to_string() });
            }
            for (path,e) in res.failed {
                warnings.push( CleanupWarning{ path, reason: e.to_string() });
            }
        }
        Err(e) => warnings.push( CleanupWarning{ path: dir.to_path_buf(), reason: e.to_string() })
    }

    for w in &warnings { warn!("{w}") }
    warnings
}
