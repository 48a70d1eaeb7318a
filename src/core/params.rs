use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Names (or paths) of the external executables the pipeline shells out to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub gdalbuildvrt: String,
    pub gdal_translate: String,
    pub gdalwarp: String,
    pub gsutil: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            gdalbuildvrt: "gdalbuildvrt".to_string(),
            gdal_translate: "gdal_translate".to_string(),
            gdalwarp: "gdalwarp".to_string(),
            gsutil: "gsutil".to_string(),
        }
    }
}

impl ToolConfig {
    /// Load from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Run parameters suitable for config files and programmatic use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosaicParams {
    pub year: i32,
    /// Directory receiving the intermediate VRTs, input lists and manifest
    pub work_dir: PathBuf,
    /// Warp the typed mosaics onto the tile grid after building them
    pub warp: bool,
    /// Target pixel size in grid units (meters for UTM grids)
    pub resolution: f64,
    pub tools: ToolConfig,
}

impl MosaicParams {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }
}

impl Default for MosaicParams {
    fn default() -> Self {
        Self {
            year: 2017,
            work_dir: PathBuf::from("."),
            warp: false,
            resolution: 30.0,
            tools: ToolConfig::default(),
        }
    }
}
