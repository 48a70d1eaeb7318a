//! Pipeline steps: archive discovery, per-layer mosaic assembly and grid warping,
//! plus the run parameters they share. Consumed by the high-level `api` module.
pub mod archive;
pub mod mosaic;
pub mod params;
pub mod warp;
