//! High-level library API: validate locations, locate the year's tile archives,
//! build the per-layer mosaics and optionally warp them onto a tile grid.
//! Prefer this entrypoint over the individual `core` steps when embedding.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::archive::locate_archives;
use crate::core::mosaic::{MosaicSet, build_mosaics};
use crate::core::params::MosaicParams;
use crate::core::warp::{WarpedTile, warp_to_tiles};
use crate::error::Result;
use crate::io::command::ToolRunner;
use crate::io::grid::read_tile_grid;
use crate::io::location::{Location, resolve_existing};
use crate::io::manifest::RunManifest;

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub source: Location,
    pub destination: Location,
    pub archives: Vec<String>,
    pub mosaics: MosaicSet,
    pub tiles: Vec<WarpedTile>,
    pub manifest: PathBuf,
}

/// Check that `<src>/<year>/tarfiles` and `<dst>/<year>` exist, in that order.
pub fn validate_locations<R: ToolRunner + ?Sized>(
    src: &str,
    dst: &str,
    params: &MosaicParams,
    runner: &mut R,
) -> Result<(Location, Location)> {
    let year = params.year;
    let source = resolve_existing(
        src,
        &format!("{}/tarfiles", year),
        &params.tools.gsutil,
        runner,
    )?;
    let destination = resolve_existing(dst, &year.to_string(), &params.tools.gsutil, runner)?;
    Ok((source, destination))
}

/// Run the whole pipeline for `params.year`.
///
/// `tiles` is only read when `params.warp` is set.
pub fn prepare_year<R: ToolRunner + ?Sized>(
    tiles: &Path,
    src: &str,
    dst: &str,
    params: &MosaicParams,
    runner: &mut R,
) -> Result<RunReport> {
    let (source, destination) = validate_locations(src, dst, params, runner)?;

    let grid = if params.warp {
        Some(read_tile_grid(tiles)?)
    } else {
        None
    };

    let archives = locate_archives(&source, &params.tools, runner)?;
    let mosaics = build_mosaics(&source, &archives, params, runner)?;

    let mut manifest = RunManifest::new(
        params.year,
        source.to_string(),
        destination.to_string(),
        archives.clone(),
        mosaics.clone(),
    );
    // Mosaics are recorded even if warping fails below
    let mut manifest_path = manifest.write(&params.work_dir)?;
    if let Some(grid) = &grid {
        manifest.tiles = warp_to_tiles(grid, &mosaics, &destination, params, runner)?;
        manifest_path = manifest.write(&params.work_dir)?;
    } else {
        info!("Tile warping disabled; typed mosaics left in {:?}", params.work_dir);
    }

    Ok(RunReport {
        source,
        destination,
        archives,
        mosaics,
        tiles: manifest.tiles,
        manifest: manifest_path,
    })
}
