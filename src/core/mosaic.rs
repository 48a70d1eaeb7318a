//! Per-layer virtual mosaics.
//!
//! For every layer, a VRT referencing the layer's raster member inside each tile
//! archive is built with `gdalbuildvrt`, then converted with `gdal_translate` to
//! the layer's data type. The build is checked; the conversion is best effort and
//! only logged when it fails.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::archive::tile_id;
use crate::core::params::MosaicParams;
use crate::error::{Error, Result};
use crate::io::command::{StdoutMode, ToolCommand, ToolRunner, check_call};
use crate::io::location::Location;
use crate::types::{Era, Layer, OutputType, member_extension, short_year};

/// Name of a layer's raster inside the archive of `tile`, e.g. `N35E139_17_sl_HH_F02DAR`
pub fn member_name(tile: &str, year: i32, layer: Layer) -> String {
    let mut name = format!("{}_{}_{}", tile, short_year(year), layer.member_suffix());
    if let Some(postfix) = Era::for_year(year).member_postfix() {
        name.push('_');
        name.push_str(postfix);
    }
    name.push_str(member_extension(year));
    name
}

/// GDAL path of a layer raster inside `archive`, which lives directly under `src`
pub fn member_path(src: &Location, archive: &str, year: i32, layer: Layer) -> String {
    format!(
        "/vsitar/{}/{}/{}",
        src.vsi_path(),
        archive,
        member_name(tile_id(archive), year, layer)
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerMosaic {
    pub layer: Layer,
    pub output_type: OutputType,
    pub members: usize,
    /// Input file list handed to `gdalbuildvrt`
    pub input_list: PathBuf,
    /// Mosaic in the source data type
    pub raw_vrt: PathBuf,
    /// Mosaic converted to `output_type`; may be missing if the conversion failed
    pub typed_vrt: PathBuf,
    pub converted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MosaicSet {
    pub layers: Vec<LayerMosaic>,
}

impl MosaicSet {
    pub fn get(&self, layer: Layer) -> Option<&LayerMosaic> {
        self.layers.iter().find(|m| m.layer == layer)
    }
}

fn layer_file(work_dir: &Path, layer: Layer, stage: u8, ext: &str) -> PathBuf {
    work_dir.join(format!("{}_{}.{}", layer, stage, ext))
}

/// Build the raw and typed VRTs of every layer for `archives` found under `src`.
pub fn build_mosaics<R: ToolRunner + ?Sized>(
    src: &Location,
    archives: &[String],
    params: &MosaicParams,
    runner: &mut R,
) -> Result<MosaicSet> {
    if archives.is_empty() {
        return Err(Error::NoArchives(src.to_string()));
    }
    fs::create_dir_all(&params.work_dir)?;

    let mut set = MosaicSet::default();
    for layer in Layer::ALL {
        let members: Vec<String> = archives
            .iter()
            .map(|archive| member_path(src, archive, params.year, layer))
            .collect();

        let input_list = layer_file(&params.work_dir, layer, 0, "txt");
        fs::write(&input_list, members.join("\n") + "\n")?;

        let raw_vrt = layer_file(&params.work_dir, layer, 0, "vrt");
        info!("Building {} mosaic from {} tiles", layer, members.len());
        let build = ToolCommand::new(&params.tools.gdalbuildvrt)
            .arg("-overwrite")
            .arg("-input_file_list")
            .arg(input_list.display().to_string())
            .arg(raw_vrt.display().to_string());
        check_call(runner, &build, StdoutMode::Inherit)?;

        let output_type = layer.output_type();
        let typed_vrt = layer_file(&params.work_dir, layer, 1, "vrt");
        let translate = ToolCommand::new(&params.tools.gdal_translate)
            .args(["-of", "VRT", "-ot"])
            .arg(output_type.to_string())
            .arg(raw_vrt.display().to_string())
            .arg(typed_vrt.display().to_string());
        let converted = match runner.run(&translate, StdoutMode::Inherit) {
            Ok(out) if out.success() => true,
            Ok(out) => {
                warn!(
                    "Conversion of {} mosaic to {} exited with {:?}; continuing",
                    layer, output_type, out.code
                );
                false
            }
            Err(e) => {
                warn!("Conversion of {} mosaic to {} failed: {}", layer, output_type, e);
                false
            }
        };

        set.layers.push(LayerMosaic {
            layer,
            output_type,
            members: members.len(),
            input_list,
            raw_vrt,
            typed_vrt,
            converted,
        });
    }
    Ok(set)
}
