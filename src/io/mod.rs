//! I/O layer: external tool invocation, source/destination locations,
//! the tile grid reader, in-place raster edits and the JSON run manifest.
pub mod command;
pub use command::{StdoutMode, SystemRunner, ToolCommand, ToolOutput, ToolRunner};

pub mod location;
pub use location::{Location, Scheme};

pub mod grid;
pub use grid::{Extent, GridCell, TileGrid};

pub mod manifest;
pub mod raster;
