//! Source and destination locations: a local directory or an object-store
//! prefix (`s3://bucket/prefix`, `gs://bucket/prefix`), plus the GDAL virtual
//! filesystem paths used to reach files inside them.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::io::command::{StdoutMode, ToolCommand, ToolRunner, check_call};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Scheme {
    S3,
    Gs,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::S3 => "s3",
            Scheme::Gs => "gs",
        }
    }

    /// GDAL virtual filesystem handler for this store
    pub fn vsi_handler(self) -> &'static str {
        match self {
            Scheme::S3 => "/vsis3",
            Scheme::Gs => "/vsigs",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Location {
    Local(PathBuf),
    Remote {
        scheme: Scheme,
        bucket: String,
        /// Key prefix without leading or trailing slashes; may be empty
        prefix: String,
    },
}

impl Location {
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((scheme, rest)) = raw.split_once("://") else {
            return Ok(Location::Local(PathBuf::from(raw)));
        };
        let scheme = match scheme {
            "s3" => Scheme::S3,
            "gs" => Scheme::Gs,
            other => {
                return Err(Error::InvalidLocation(format!(
                    "unsupported scheme `{}` in {}",
                    other, raw
                )));
            }
        };
        let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(Error::InvalidLocation(format!("missing bucket in {}", raw)));
        }
        Ok(Location::Remote {
            scheme,
            bucket: bucket.to_string(),
            prefix: prefix.trim_matches('/').to_string(),
        })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Remote { .. })
    }

    /// Append a relative path (e.g. `2017/tarfiles`)
    pub fn join(&self, part: &str) -> Self {
        let part = part.trim_matches('/');
        match self {
            Location::Local(path) => Location::Local(path.join(part)),
            Location::Remote {
                scheme,
                bucket,
                prefix,
            } => Location::Remote {
                scheme: *scheme,
                bucket: bucket.clone(),
                prefix: join_key(prefix, part),
            },
        }
    }

    /// Path understood by GDAL: the local path itself, or `/vsis3/...`, `/vsigs/...`
    pub fn vsi_path(&self) -> String {
        match self {
            Location::Local(path) => path.display().to_string(),
            Location::Remote {
                scheme,
                bucket,
                prefix,
            } => format!("{}/{}", scheme.vsi_handler(), join_key(bucket, prefix)),
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Location::Local(path) => Some(path),
            Location::Remote { .. } => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Local(path) => write!(f, "{}", path.display()),
            Location::Remote {
                scheme,
                bucket,
                prefix,
            } => write!(f, "{}://{}", scheme.as_str(), join_key(bucket, prefix)),
        }
    }
}

fn join_key(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (_, true) => head.to_string(),
        (true, false) => tail.to_string(),
        (false, false) => format!("{}/{}", head, tail),
    }
}

/// Resolve `<raw>/<sub>` and check that it exists.
///
/// Object-store locations are probed with `gsutil ls` (a failing listing aborts);
/// local locations must be an existing directory and are canonicalized so that
/// archive member paths built from them are absolute.
pub fn resolve_existing<R: ToolRunner + ?Sized>(
    raw: &str,
    sub: &str,
    gsutil: &str,
    runner: &mut R,
) -> Result<Location> {
    let location = Location::parse(raw)?.join(sub);
    match &location {
        Location::Remote { .. } => {
            let probe = ToolCommand::new(gsutil).arg("ls").arg(location.to_string());
            check_call(runner, &probe, StdoutMode::Discard)?;
            info!("Found {}", location);
            Ok(location)
        }
        Location::Local(path) => {
            if !path.is_dir() {
                return Err(Error::InvalidDirectory(raw.to_string()));
            }
            let path = std::fs::canonicalize(path)?;
            info!("Found {:?}", path);
            Ok(Location::Local(path))
        }
    }
}
