#![doc = r#"
alos-mosaic — prepares ALOS/ALOS-2 PALSAR yearly mosaic tiles for downstream use.

JAXA distributes the global PALSAR mosaics as one `.tar.gz` per 1x1 degree tile
(`N35E139_17_MOS_F02DAR.tar.gz`). This crate locates those archives for a year under a
local directory or an `s3://` / `gs://` prefix, builds one GDAL virtual mosaic per layer
(HH, HV, incidence angle, acquisition day) that reads straight out of the archives through
`/vsitar/`, converts each mosaic to its numeric type, and can warp the result onto a UTM
tile grid.

Requirements
------------
- GDAL command-line utilities (`gdalbuildvrt`, `gdal_translate`, `gdalwarp`) on `PATH`.
- `gsutil` for object-store sources or destinations.
- GDAL development headers for the `gdal` crate (grid reading and DOY correction).

Quick start
-----------
```rust,no_run
use std::path::Path;
use alos_mosaic::{prepare_year, MosaicParams, SystemRunner};

fn main() -> alos_mosaic::Result<()> {
    let params = MosaicParams::new(2017);
    let report = prepare_year(
        Path::new("utm_tiles.geojson"),
        "s3://my-bucket/alos2",
        "/data/out",
        &params,
        &mut SystemRunner,
    )?;
    println!("{} archives, manifest at {:?}", report.archives.len(), report.manifest);
    Ok(())
}
```

Error handling
--------------
All public functions return `alos_mosaic::Result<T>`:

```rust,no_run
use std::path::Path;
use alos_mosaic::{prepare_year, Error, MosaicParams, SystemRunner};

fn main() {
    let params = MosaicParams::new(2010);
    match prepare_year(Path::new("tiles.geojson"), "/missing", "/out", &params, &mut SystemRunner) {
        Ok(_) => {}
        Err(Error::InvalidDirectory(p)) => eprintln!("bad directory: {p}"),
        Err(Error::NoArchives(dir)) => eprintln!("nothing to mosaic in {dir}"),
        Err(other) => eprintln!("failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the full pipeline for one year.
- [`core`] — archive discovery, mosaic building, grid warping, run parameters.
- [`io`] — external tool runner, locations, tile grid reader, raster edits, manifest.
- [`types`] — `Layer`, `Era` and GDAL type/resampling enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{MosaicParams, ToolConfig};
pub use error::{Error, Result};
pub use types::{Era, Layer, OutputType, Resampling};

// Steps
pub use crate::core::archive::{is_tile_archive, locate_archives, tile_id};
pub use crate::core::mosaic::{LayerMosaic, MosaicSet, build_mosaics, member_name, member_path};
pub use crate::core::warp::{WarpedTile, warp_to_tiles};

// I/O
pub use io::command::{StdoutMode, SystemRunner, ToolCommand, ToolOutput, ToolRunner};
pub use io::grid::{GridCell, TileGrid, read_tile_grid};
pub use io::location::Location;
pub use io::manifest::RunManifest;

// High-level API
pub use api::{RunReport, prepare_year, validate_locations};
