//! JSON run manifest written next to the intermediate VRTs.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::mosaic::MosaicSet;
use crate::core::warp::WarpedTile;
use crate::error::Result;
use crate::types::Era;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub year: i32,
    pub era: Era,
    pub source: String,
    pub destination: String,
    pub archives: Vec<String>,
    pub mosaics: MosaicSet,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<WarpedTile>,
    pub tool: String,
    pub tool_version: String,
    pub created: String,
}

impl RunManifest {
    pub fn new(
        year: i32,
        source: String,
        destination: String,
        archives: Vec<String>,
        mosaics: MosaicSet,
    ) -> Self {
        Self {
            year,
            era: Era::for_year(year),
            source,
            destination,
            archives,
            mosaics,
            tiles: Vec::new(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn file_name(year: i32) -> String {
        format!("mosaic_manifest_{}.json", year)
    }

    /// Write as pretty JSON into `dir`; returns the manifest path
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(Self::file_name(self.year));
        let json_string = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json_string)?;
        info!("Wrote run manifest: {:?}", path);
        Ok(path)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
