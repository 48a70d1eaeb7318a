//! Warp the typed layer mosaics onto each cell of a projected tile grid.
//!
//! Each (cell, layer) pair becomes one LZW-compressed GeoTIFF named
//! `alos_mosaic_<year>_h<h>v<v>_<LAYER>.tif`. DOY tiles are converted from
//! days-after-launch to day-of-year before they are published. Object-store
//! destinations are written to a local staging directory and copied with `gsutil cp`.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::mosaic::MosaicSet;
use crate::core::params::{MosaicParams, ToolConfig};
use crate::error::{Error, Result};
use crate::io::command::{StdoutMode, ToolCommand, ToolRunner, check_call};
use crate::io::grid::{GridCell, TileGrid};
use crate::io::location::Location;
use crate::io::raster::correct_day_of_year;
use crate::types::Layer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarpedTile {
    pub cell: String,
    pub layer: Layer,
    /// Final location of the tile (local path or object-store URL)
    pub output: String,
}

pub fn tile_file_name(year: i32, cell: &GridCell, layer: Layer) -> String {
    format!("alos_mosaic_{}_{}_{}.tif", year, cell.id(), layer)
}

pub fn warp_command(
    tools: &ToolConfig,
    epsg: i32,
    cell: &GridCell,
    layer: Layer,
    resolution: f64,
    input: &Path,
    output: &Path,
) -> ToolCommand {
    let ot = layer.output_type().to_string();
    let e = &cell.extent;
    ToolCommand::new(&tools.gdalwarp)
        .arg("-overwrite")
        .args(["-t_srs".to_string(), format!("EPSG:{}", epsg)])
        .args(["-et", "0"])
        .arg("-te")
        .args([e.xmin, e.ymin, e.xmax, e.ymax].map(|v| v.to_string()))
        .arg("-tr")
        .args([resolution.to_string(), resolution.to_string()])
        .args(["-wt".to_string(), ot.clone(), "-ot".to_string(), ot])
        .args(["-dstnodata", layer.nodata()])
        .args(["-r".to_string(), layer.resampling().to_string()])
        .args(["-co", "COMPRESS=LZW"])
        .arg(input.display().to_string())
        .arg(output.display().to_string())
}

/// Warp every layer mosaic to every grid cell, writing the tiles under `dst`.
pub fn warp_to_tiles<R: ToolRunner + ?Sized>(
    grid: &TileGrid,
    mosaics: &MosaicSet,
    dst: &Location,
    params: &MosaicParams,
    runner: &mut R,
) -> Result<Vec<WarpedTile>> {
    // Kept alive until every staged tile has been uploaded
    let staging = if dst.is_remote() {
        std::fs::create_dir_all(&params.work_dir)?;
        Some(tempfile::Builder::new().prefix("warp-").tempdir_in(&params.work_dir)?)
    } else {
        None
    };
    let out_dir: PathBuf = match (&staging, dst.local_path()) {
        (Some(dir), _) => dir.path().to_path_buf(),
        (None, Some(path)) => path.to_path_buf(),
        (None, None) => return Err(Error::InvalidLocation(dst.to_string())),
    };

    let mut tiles = Vec::with_capacity(grid.cells.len() * Layer::ALL.len());
    for cell in &grid.cells {
        for layer in Layer::ALL {
            let mosaic = mosaics.get(layer).ok_or(Error::InvalidArgument {
                arg: "layer",
                value: layer.to_string(),
            })?;
            let input = if mosaic.converted {
                &mosaic.typed_vrt
            } else {
                warn!("{} typed mosaic unavailable, warping the raw mosaic", layer);
                &mosaic.raw_vrt
            };

            let name = tile_file_name(params.year, cell, layer);
            let local = out_dir.join(&name);
            info!("Warping {} to {}", layer, cell.id());
            let cmd = warp_command(
                &params.tools,
                grid.epsg,
                cell,
                layer,
                params.resolution,
                input,
                &local,
            );
            check_call(runner, &cmd, StdoutMode::Inherit)?;

            if layer == Layer::Doy {
                correct_day_of_year(&local, params.year)?;
            }

            let output = if dst.is_remote() {
                let target = format!("{}/{}", dst, name);
                let upload = ToolCommand::new(&params.tools.gsutil)
                    .arg("cp")
                    .arg(local.display().to_string())
                    .arg(&target);
                check_call(runner, &upload, StdoutMode::Inherit)?;
                std::fs::remove_file(&local)?;
                target
            } else {
                local.display().to_string()
            };

            tiles.push(WarpedTile {
                cell: cell.id(),
                layer,
                output,
            });
        }
    }
    info!("Wrote {} tiles to {}", tiles.len(), dst);
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::grid::Extent;

    fn cell() -> GridCell {
        GridCell {
            h: "3".to_string(),
            v: "11".to_string(),
            mask: None,
            extent: Extent {
                xmin: 300000.0,
                ymin: 4000000.0,
                xmax: 409800.0,
                ymax: 4109800.0,
            },
        }
    }

    #[test]
    fn tile_names_embed_year_cell_and_layer() {
        assert_eq!(
            tile_file_name(2018, &cell(), Layer::Inc),
            "alos_mosaic_2018_h3v11_INC.tif"
        );
    }

    #[test]
    fn intensity_warp_is_bilinear_float() {
        let cmd = warp_command(
            &ToolConfig::default(),
            32610,
            &cell(),
            Layer::Hv,
            30.0,
            Path::new("HV_1.vrt"),
            Path::new("out.tif"),
        );
        assert_eq!(
            cmd.to_string(),
            "gdalwarp -overwrite -t_srs EPSG:32610 -et 0 -te 300000 4000000 409800 4109800 \
             -tr 30 30 -wt Float32 -ot Float32 -dstnodata nan -r bilinear -co COMPRESS=LZW \
             HV_1.vrt out.tif"
        );
    }

    #[test]
    fn doy_warp_is_nearest_int16_with_zero_nodata() {
        let cmd = warp_command(
            &ToolConfig::default(),
            32610,
            &cell(),
            Layer::Doy,
            25.0,
            Path::new("DOY_1.vrt"),
            Path::new("out.tif"),
        );
        let args = cmd.args.join(" ");
        assert!(args.contains("-tr 25 25"));
        assert!(args.contains("-wt Int16 -ot Int16"));
        assert!(args.contains("-dstnodata 0"));
        assert!(args.contains("-r near"));
    }
}
