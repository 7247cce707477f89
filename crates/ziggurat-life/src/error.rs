use std::fmt;

/// Errors surfaced while building or driving a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Requested grid width or height was zero.
    InvalidDimensions { width: u32, height: u32 },
    /// Compute tile size was zero.
    InvalidTileSize(u32),
    /// The device cannot run a `tile × tile` workgroup.
    TileExceedsDevice { tile: u32, limit: u32 },
    /// The grid is larger than the device's texture or storage limits.
    GridExceedsDevice { width: u32, height: u32 },
    /// Mapping the readback buffer or waiting on the device failed.
    Readback(String),
}

pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    pub(crate) fn readback(msg: impl Into<String>) -> Self {
        Self::Readback(msg.into())
    }
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive (requested {width}x{height})")
            }
            Self::InvalidTileSize(tile) => write!(f, "compute tile size must be positive (got {tile})"),
            Self::TileExceedsDevice { tile, limit } => {
                write!(f, "tile size {tile} exceeds device workgroup limit ({limit})")
            }
            Self::GridExceedsDevice { width, height } => {
                write!(f, "grid {width}x{height} exceeds device texture/storage limits")
            }
            Self::Readback(msg) => write!(f, "grid readback failed: {msg}"),
        }
    }
}

impl std::error::Error for LifeError {}
