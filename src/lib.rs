//! # texture-codec-core
//!
//! The core 16x16-block transform for a JPEG-like lossy texture codec
//! aimed at real-time texture streaming: a reversible YCoCg-R color
//! lift, fixed 4:2:0 chroma subsampling, uncompressed alpha, and a
//! choice of two bit-exact DCT kernels (a floating-point
//! Arai-Agui-Nakajima kernel and a Bink-2-style integer lifting
//! kernel). This crate does not read/write any container format or
//! entropy-code its output; it produces quantized coefficients (and raw
//! alpha bytes) that a caller feeds to whatever back-end compressor and
//! storage layer it uses.
//!
//! ## Encoding a block
//! ```
//! use texture_codec_core::block::encode16_i;
//! use texture_codec_core::kernel::qtables_encode_i;
//!
//! let rgba = [128u8; 1024];
//! let (q_luma, q_chroma) = qtables_encode_i(90);
//!
//! let mut y = [0i16; 256];
//! let mut co = [0i16; 64];
//! let mut cg = [0i16; 64];
//! let mut a = [0u8; 256];
//! encode16_i(&mut y, &mut co, &mut cg, &mut a, &rgba, &q_luma, &q_chroma);
//! ```

pub mod block;
pub mod colorspace;
pub mod error;
pub mod fdct;
pub mod idct_int;
pub mod kernel;
pub mod quantization;
pub mod sampler;
pub mod tables;
pub mod tiler;

pub use block::{decode16_rgb_f, decode16_rgb_i, decode16_rgba_f, decode16_rgba_i, encode16_f, encode16_i};
pub use colorspace::{rgba_to_ycocga, ycocg_to_rgb, ycocga_to_rgba};
pub use error::CodecError;
pub use kernel::{qtables_decode_f, qtables_decode_i, qtables_encode_f, qtables_encode_i, DctKernel};
pub use tiler::{copy_tile, tile_alloc, tile_count, tile_free, BorderMode, Tile, TilerConfig};
