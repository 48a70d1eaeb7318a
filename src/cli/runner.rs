use tracing::info;
use tracing_subscriber::EnvFilter;

use alos_mosaic::api::prepare_year;
use alos_mosaic::core::params::{MosaicParams, ToolConfig};
use alos_mosaic::io::SystemRunner;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn params_from_args(args: &CliArgs) -> Result<MosaicParams, Box<dyn std::error::Error>> {
    if !(args.resolution.is_finite() && args.resolution > 0.0) {
        return Err(AppError::InvalidResolution {
            resolution: args.resolution,
        }
        .into());
    }
    if !(1000..=9999).contains(&args.year) {
        return Err(AppError::InvalidYear { year: args.year }.into());
    }

    let tools = match &args.config {
        Some(path) => ToolConfig::from_json_file(path)?,
        None => ToolConfig::default(),
    };

    Ok(MosaicParams {
        year: args.year,
        work_dir: args.work_dir.clone(),
        warp: args.warp,
        resolution: args.resolution,
        tools,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = params_from_args(&args)?;
    info!("Processing {} mosaic from {} into {}", params.year, args.src, args.dst);

    let report = prepare_year(&args.tiles, &args.src, &args.dst, &params, &mut SystemRunner)?;

    let converted = report.mosaics.layers.iter().filter(|m| m.converted).count();
    info!("Archives: {}", report.archives.len());
    info!(
        "Mosaics converted: {}/{}",
        converted,
        report.mosaics.layers.len()
    );
    if params.warp {
        info!("Tiles written: {}", report.tiles.len());
    }
    info!("Manifest: {:?}", report.manifest);
    Ok(())
}
