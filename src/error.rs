use std::error::Error;
use std::fmt::Display;

/// # The error type for the image tiler
///
/// Every per-block transform in this crate (`encode16`, `decode16_rgba`,
/// `fdct_f`, `fdct_i`, ...) is a total function over its documented input
/// domain and never returns this type; only the tiler has argument and
/// allocation edges that can fail (see `tiler.rs`).
#[derive(Debug)]
pub enum CodecError {
    /// `TilerConfig::tile_w`/`tile_h` is not large enough to hold the
    /// configured border on both sides (`tile_w`/`tile_h` must each be
    /// `>= 2 * border_size + 1`).
    TileTooSmallForBorder { tile_w: u32, tile_h: u32, border: u32 },

    /// `copy_tile`/`tile_alloc` was asked for a tile index outside the
    /// `[0, tile_count)` range for the configured image/tile size.
    TileIndexOutOfRange { index: u32, count: u32 },

    /// The pixel buffer for a tile could not be allocated.
    AllocationFailed { bytes: usize },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CodecError::*;
        match self {
            TileTooSmallForBorder { tile_w, tile_h, border } => write!(
                f,
                "tile size {}x{} is too small for border {} (need at least {}x{})",
                tile_w, tile_h, border, 2 * border + 1, 2 * border + 1
            ),
            TileIndexOutOfRange { index, count } => write!(
                f,
                "tile index {} is out of range for tile count {}",
                index, count
            ),
            AllocationFailed { bytes } => write!(
                f,
                "failed to allocate {} bytes for a tile pixel buffer",
                bytes
            ),
        }
    }
}

impl Error for CodecError {}
