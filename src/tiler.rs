//! Chunks an arbitrary-sized RGBA8 image into fixed-size tiles (16x16 for
//! direct use with [`crate::block::encode16_f`]/`encode16_i`, or any
//! other size a caller needs), with configurable border padding and two
//! border-sampling modes.
//!
//! Tiles own their pixel buffer and are allocated/freed explicitly
//! ([`tile_alloc`]/[`tile_free`]) rather than handed back as a bare
//! `Vec`, mirroring the caller-owns-the-buffer lifecycle the rest of
//! this crate follows (no internal global state, no hidden caches).

use crate::error::CodecError;

/// How pixels outside the source image are sampled when filling a
/// tile's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Border pixels repeat the nearest in-bounds source pixel.
    ClampToEdge,
    /// Border pixels are a fixed RGBA8 color.
    ConstantColor([u8; 4]),
}

/// Describes the source image and how to partition it into tiles.
#[derive(Debug, Clone, Copy)]
pub struct TilerConfig<'a> {
    /// Row-major RGBA8 source pixels, stride `image_w * 4`.
    pub source: &'a [u8],
    pub image_w: u32,
    pub image_h: u32,
    /// Output tile width, including border on both sides. Must be
    /// `>= 2 * border + 1`.
    pub tile_w: u32,
    /// Output tile height, including border on both sides. Must be
    /// `>= 2 * border + 1`.
    pub tile_h: u32,
    pub border: u32,
    pub border_mode: BorderMode,
}

/// An allocated, owned output tile.
pub struct Tile {
    pub col: u32,
    pub row: u32,
    pub index: u32,
    pub tile_w: u32,
    pub tile_h: u32,
    /// Top-left corner of the (unpadded) source rectangle this tile was
    /// built from, in source image coordinates.
    pub source_x: u32,
    pub source_y: u32,
    /// Actual source pixels covered, before right/bottom padding.
    pub source_w: u32,
    pub source_h: u32,
    /// Columns/rows of the inner (border-excluded) region that fell past
    /// the image's right/bottom edge and were filled by edge extension.
    pub pad_right: u32,
    pub pad_bottom: u32,
    pub bytes_per_row: u32,
    pixels: Vec<u8>,
}

impl Tile {
    /// The tile's `tile_w * tile_h * 4` RGBA8 pixel buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Same as [`Tile::pixels`] but mutable, for callers that want to
    /// pass the buffer directly into [`crate::block::encode16_f`] and
    /// friends without an intermediate copy.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

fn validate_dims(cfg: &TilerConfig) -> Result<(u32, u32), CodecError> {
    let min = 2 * cfg.border + 1;
    if cfg.tile_w < min || cfg.tile_h < min {
        return Err(CodecError::TileTooSmallForBorder {
            tile_w: cfg.tile_w,
            tile_h: cfg.tile_h,
            border: cfg.border,
        });
    }
    Ok((cfg.tile_w - 2 * cfg.border, cfg.tile_h - 2 * cfg.border))
}

fn grid(cfg: &TilerConfig, inner_w: u32, inner_h: u32) -> (u32, u32, u32) {
    let w_out = (cfg.image_w + inner_w - 1) / inner_w;
    let h_out = (cfg.image_h + inner_h - 1) / inner_h;
    (w_out, h_out, w_out * h_out)
}

/// Returns `(tiles_across, tiles_down, total_tile_count)` for `cfg`.
pub fn tile_count(cfg: &TilerConfig) -> Result<(u32, u32, u32), CodecError> {
    let (inner_w, inner_h) = validate_dims(cfg)?;
    Ok(grid(cfg, inner_w, inner_h))
}

/// Allocates a tile's pixel buffer for `index`, without filling it.
/// Call [`copy_tile`] to populate the returned tile.
pub fn tile_alloc(cfg: &TilerConfig, index: u32) -> Result<Tile, CodecError> {
    let (inner_w, inner_h) = validate_dims(cfg)?;
    let (w_out, _h_out, count) = grid(cfg, inner_w, inner_h);
    if index >= count {
        return Err(CodecError::TileIndexOutOfRange { index, count });
    }

    let bytes_per_row = cfg.tile_w as usize * 4;
    let bytes_per_tile = bytes_per_row * cfg.tile_h as usize;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(bytes_per_tile)
        .map_err(|_| CodecError::AllocationFailed { bytes: bytes_per_tile })?;
    pixels.resize(bytes_per_tile, 0);

    Ok(Tile {
        col: index % w_out,
        row: index / w_out,
        index,
        tile_w: cfg.tile_w,
        tile_h: cfg.tile_h,
        source_x: 0,
        source_y: 0,
        source_w: 0,
        source_h: 0,
        pad_right: 0,
        pad_bottom: 0,
        bytes_per_row: bytes_per_row as u32,
        pixels,
    })
}

/// Releases a tile's pixel buffer. Present for lifecycle symmetry with
/// [`tile_alloc`]; dropping a `Tile` does the same thing.
pub fn tile_free(tile: Tile) {
    drop(tile);
}

#[inline]
fn read_source_pixel(cfg: &TilerConfig, y: u32, x: u32) -> [u8; 4] {
    let idx = (y as usize * cfg.image_w as usize + x as usize) * 4;
    [cfg.source[idx], cfg.source[idx + 1], cfg.source[idx + 2], cfg.source[idx + 3]]
}

#[inline]
fn write_px(dst: &mut [u8], col: usize, px: [u8; 4]) {
    dst[col * 4..col * 4 + 4].copy_from_slice(&px);
}

/// Builds one output row that is `border` columns of left border,
/// `source_w` source pixels starting at `(source_x, src_y)`, `pad_right`
/// columns repeating the last source pixel, then `border` columns of
/// right border. Used both for interior rows and, when `border_mode` is
/// `ClampToEdge`, for the top/bottom border rows (fed a clamped `src_y`).
fn emit_interior_row(dst: &mut [u8], cfg: &TilerConfig, src_y: u32, source_x: u32, source_w: u32, pad_right: u32) {
    let border = cfg.border as usize;
    let mut col = 0usize;

    let left_px = match cfg.border_mode {
        BorderMode::ConstantColor(c) => c,
        BorderMode::ClampToEdge => read_source_pixel(cfg, src_y, source_x),
    };
    for _ in 0..border {
        write_px(dst, col, left_px);
        col += 1;
    }

    for k in 0..source_w {
        let px = read_source_pixel(cfg, src_y, source_x + k);
        write_px(dst, col, px);
        col += 1;
    }

    let last_px = read_source_pixel(cfg, src_y, source_x + source_w - 1);
    for _ in 0..pad_right {
        write_px(dst, col, last_px);
        col += 1;
    }

    let right_px = match cfg.border_mode {
        BorderMode::ConstantColor(c) => c,
        BorderMode::ClampToEdge => last_px,
    };
    for _ in 0..border {
        write_px(dst, col, right_px);
        col += 1;
    }
}

fn emit_constant_row(dst: &mut [u8], color: [u8; 4]) {
    let cols = dst.len() / 4;
    for col in 0..cols {
        write_px(dst, col, color);
    }
}

fn row_range(row: usize, bytes_per_row: usize) -> (usize, usize) {
    (row * bytes_per_row, (row + 1) * bytes_per_row)
}

/// Fills an already-allocated `tile` (from [`tile_alloc`]) with the
/// pixel content for `index`.
pub fn copy_tile(tile: &mut Tile, cfg: &TilerConfig, index: u32) -> Result<(), CodecError> {
    let (inner_w, inner_h) = validate_dims(cfg)?;
    let (w_out, _h_out, count) = grid(cfg, inner_w, inner_h);
    if index >= count {
        return Err(CodecError::TileIndexOutOfRange { index, count });
    }

    let col = index % w_out;
    let row = index / w_out;
    let source_x = col * inner_w;
    let source_y = row * inner_h;
    let source_w = inner_w.min(cfg.image_w - source_x);
    let source_h = inner_h.min(cfg.image_h - source_y);
    let pad_right = inner_w - source_w;
    let pad_bottom = inner_h - source_h;

    tile.col = col;
    tile.row = row;
    tile.index = index;
    tile.source_x = source_x;
    tile.source_y = source_y;
    tile.source_w = source_w;
    tile.source_h = source_h;
    tile.pad_right = pad_right;
    tile.pad_bottom = pad_bottom;

    let border = cfg.border;
    let bytes_per_row = tile.bytes_per_row as usize;
    let mut dst_row = 0usize;

    for _ in 0..border {
        let (s, e) = row_range(dst_row, bytes_per_row);
        match cfg.border_mode {
            BorderMode::ConstantColor(c) => emit_constant_row(&mut tile.pixels[s..e], c),
            BorderMode::ClampToEdge => emit_interior_row(&mut tile.pixels[s..e], cfg, source_y, source_x, source_w, pad_right),
        }
        dst_row += 1;
    }

    for i in 0..source_h {
        let (s, e) = row_range(dst_row, bytes_per_row);
        emit_interior_row(&mut tile.pixels[s..e], cfg, source_y + i, source_x, source_w, pad_right);
        dst_row += 1;
    }

    for _ in 0..pad_bottom {
        let (ps, pe) = row_range(dst_row - 1, bytes_per_row);
        let prev = tile.pixels[ps..pe].to_vec();
        let (s, e) = row_range(dst_row, bytes_per_row);
        tile.pixels[s..e].copy_from_slice(&prev);
        dst_row += 1;
    }

    let bottom_src_y = source_y + source_h - 1;
    for _ in 0..border {
        let (s, e) = row_range(dst_row, bytes_per_row);
        match cfg.border_mode {
            BorderMode::ConstantColor(c) => emit_constant_row(&mut tile.pixels[s..e], c),
            BorderMode::ClampToEdge => emit_interior_row(&mut tile.pixels[s..e], cfg, bottom_src_y, source_x, source_w, pad_right),
        }
        dst_row += 1;
    }

    debug_assert_eq!(dst_row as u32, tile.tile_h);
    Ok(())
}
