use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "alos-mosaic",
    version,
    about = "Build ALOS/ALOS-2 PALSAR yearly mosaic VRTs and warp them onto a UTM tile grid"
)]
pub struct CliArgs {
    /// Tile grid (e.g. GeoJSON of UTM tiles); read only with --warp
    pub tiles: PathBuf,

    /// Mosaic year
    pub year: i32,

    /// Source location (s3://, gs:// or local path); archives are expected under src/year/tarfiles/
    pub src: String,

    /// Destination location (s3://, gs:// or local path); tiles are stored under dst/year/
    pub dst: String,

    /// Directory for intermediate VRTs, input lists and the run manifest
    #[arg(long, default_value = ".")]
    pub work_dir: PathBuf,

    /// Warp the typed mosaics onto the tile grid
    #[arg(long, default_value_t = false)]
    pub warp: bool,

    /// Output pixel size in grid units when warping
    #[arg(long, default_value_t = 30.0)]
    pub resolution: f64,

    /// JSON file overriding external tool names/paths
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
