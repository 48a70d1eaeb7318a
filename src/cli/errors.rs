use thiserror::Error;

/// Argument errors caught before the pipeline starts
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid resolution: {resolution}. Must be a positive number")]
    InvalidResolution { resolution: f64 },

    #[error("Invalid year: {year}")]
    InvalidYear { year: i32 },
}
