//! Archive discovery: list the per-tile `.tar.gz` packages of one year and keep
//! those whose names follow the JAXA mosaic tile convention
//! (`N35E139_17_MOS_F02DAR.tar.gz`, `S05W061_10_MOS.tar.gz`, ...).
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::core::params::ToolConfig;
use crate::error::{Error, Result};
use crate::io::command::{ToolCommand, ToolRunner, check_output};
use crate::io::location::Location;

pub const ARCHIVE_EXTENSION: &str = ".tar.gz";

static TILE_ARCHIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[NS]\d{2}[EW]\d{3}_\d{2}_MOS").expect("tile archive pattern is valid")
});

/// True for `<N|S>dd<E|W>ddd_dd_MOS...tar.gz` file names
pub fn is_tile_archive(name: &str) -> bool {
    name.ends_with(ARCHIVE_EXTENSION) && TILE_ARCHIVE_RE.is_match(name)
}

/// Tile identifier of an archive name, e.g. `N35E139`
pub fn tile_id(name: &str) -> &str {
    name.split('_').next().unwrap_or(name)
}

/// List the tile archives directly under `src` (already resolved to `<root>/<year>/tarfiles`).
///
/// Returns sorted file names; fails with `Error::NoArchives` if none match.
pub fn locate_archives<R: ToolRunner + ?Sized>(
    src: &Location,
    tools: &ToolConfig,
    runner: &mut R,
) -> Result<Vec<String>> {
    let names = match src {
        Location::Local(dir) => {
            let mut names = Vec::new();
            for entry in std::fs::read_dir(dir)? {
                let entry = entry?;
                // follows symlinks; dangling links are skipped
                match std::fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_file() => {
                        names.push(entry.file_name().to_string_lossy().into_owned());
                    }
                    Ok(_) => {}
                    Err(e) => debug!("Skipping unreadable entry {:?}: {}", entry.path(), e),
                }
            }
            names
        }
        Location::Remote { .. } => {
            let cmd = ToolCommand::new(&tools.gsutil)
                .arg("ls")
                .arg(format!("{}/*{}", src, ARCHIVE_EXTENSION));
            check_output(runner, &cmd)?
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| line.rsplit('/').next().unwrap_or(line).to_string())
                .collect()
        }
    };

    let mut archives: Vec<String> = names
        .into_iter()
        .filter(|name| {
            let keep = is_tile_archive(name);
            if !keep {
                debug!("Skipping non-tile file: {}", name);
            }
            keep
        })
        .collect();
    archives.sort();

    if archives.is_empty() {
        return Err(Error::NoArchives(src.to_string()));
    }
    info!("Found {} tile archives under {}", archives.len(), src);
    Ok(archives)
}
