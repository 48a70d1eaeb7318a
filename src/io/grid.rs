//! Tile grid reader. The grid is any OGR vector dataset (typically GeoJSON)
//! whose first layer holds one polygon per output tile with `h`/`v` attributes.
use std::path::Path;

use gdal::Dataset;
use gdal::vector::LayerAccess;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Bounding box in the grid's projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub h: String,
    pub v: String,
    /// Carried through from the grid file when present; not acted on
    pub mask: Option<String>,
    pub extent: Extent,
}

impl GridCell {
    /// Identifier used in output file names, e.g. `h12v3`
    pub fn id(&self) -> String {
        format!("h{}v{}", self.h, self.v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    pub epsg: i32,
    pub cells: Vec<GridCell>,
}

pub fn read_tile_grid(path: &Path) -> Result<TileGrid> {
    let dataset = Dataset::open(path)?;
    let mut layer = dataset.layer(0)?;
    let epsg = layer
        .spatial_ref()
        .ok_or_else(|| Error::invalid_grid(path, "layer has no spatial reference"))?
        .auth_code()
        .map_err(|e| Error::invalid_grid(path, format!("no EPSG code: {}", e)))?;

    let mut cells = Vec::new();
    for feature in layer.features() {
        let h_idx = feature
            .field_index("h")
            .map_err(|_| Error::invalid_grid(path, "missing `h` attribute"))?;
        let v_idx = feature
            .field_index("v")
            .map_err(|_| Error::invalid_grid(path, "missing `v` attribute"))?;
        let h = feature
            .field_as_string(h_idx)?
            .ok_or_else(|| Error::invalid_grid(path, "empty `h` attribute"))?;
        let v = feature
            .field_as_string(v_idx)?
            .ok_or_else(|| Error::invalid_grid(path, "empty `v` attribute"))?;
        let mask = match feature.field_index("mask") {
            Ok(idx) => feature.field_as_string(idx)?,
            Err(_) => None,
        };
        let envelope = feature
            .geometry()
            .ok_or_else(|| Error::invalid_grid(path, format!("cell h{}v{} has no geometry", h, v)))?
            .envelope();
        cells.push(GridCell {
            h,
            v,
            mask,
            extent: Extent {
                xmin: envelope.MinX,
                ymin: envelope.MinY,
                xmax: envelope.MaxX,
                ymax: envelope.MaxY,
            },
        });
    }
    if cells.is_empty() {
        return Err(Error::invalid_grid(path, "no features"));
    }
    info!("Loaded {} grid cells (EPSG:{}) from {:?}", cells.len(), epsg, path);
    Ok(TileGrid { epsg, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: &str = r#"{
  "type": "FeatureCollection",
  "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:EPSG::32633" } },
  "features": [
    { "type": "Feature", "properties": { "h": 1, "v": 2, "mask": 1 },
      "geometry": { "type": "Polygon", "coordinates": [[[300000, 4000000], [330000, 4000000], [330000, 4030000], [300000, 4030000], [300000, 4000000]]] } },
    { "type": "Feature", "properties": { "h": 2, "v": 2, "mask": 0 },
      "geometry": { "type": "Polygon", "coordinates": [[[330000, 4000000], [360000, 4000000], [360000, 4030000], [330000, 4030000], [330000, 4000000]]] } }
  ]
}"#;

    #[test]
    fn reads_cells_and_epsg_from_geojson() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles.geojson");
        std::fs::write(&path, GRID).unwrap();

        let grid = read_tile_grid(&path).unwrap();
        assert_eq!(grid.epsg, 32633);
        assert_eq!(grid.cells.len(), 2);
        assert_eq!(grid.cells[0].id(), "h1v2");
        assert_eq!(grid.cells[0].mask.as_deref(), Some("1"));
        assert_eq!(
            grid.cells[1].extent,
            Extent {
                xmin: 330000.0,
                ymin: 4000000.0,
                xmax: 360000.0,
                ymax: 4030000.0,
            }
        );
    }
}
