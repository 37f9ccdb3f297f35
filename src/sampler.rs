//! Extraction and repacking of 8x8 subblocks from a 16x16 YCoCg block:
//! quadrant extraction for luma, 2x2 box-filter subsampling for 4:2:0
//! chroma, and the inverse operations used on decode.

use crate::colorspace::YCOCG_BLOCK_LEN;

/// Row stride of the interleaved YCoCg buffer: 16 pixels * 3 channels.
const ROW_STRIDE: usize = 48;

/// Extracts the 8x8 quadrant `(qx, qy)` of `channel` from a 16x16 YCoCg
/// block. `qx`/`qy` in `{0, 1}` select left/right and top/bottom halves;
/// `channel` in `{0, 1, 2}` selects Y/Co/Cg.
pub fn subblock(samples: &mut [f32; 64], ycocg: &[i16; YCOCG_BLOCK_LEN], qx: usize, qy: usize, channel: usize) {
    debug_assert!(qx < 2 && qy < 2 && channel < 3);

    for i in 0..8 {
        for j in 0..8 {
            let row = qy * 8 + i;
            let col = qx * 8 + j;
            let idx = row * ROW_STRIDE + col * 3 + channel;
            samples[i * 8 + j] = ycocg[idx] as f32;
        }
    }
}

/// Like [`subblock`] but writes `i16` samples directly, for the integer
/// kernel (which operates on raw YCoCg values with no centering).
pub fn subblock_i16(samples: &mut [i16; 64], ycocg: &[i16; YCOCG_BLOCK_LEN], qx: usize, qy: usize, channel: usize) {
    debug_assert!(qx < 2 && qy < 2 && channel < 3);

    for i in 0..8 {
        for j in 0..8 {
            let row = qy * 8 + i;
            let col = qx * 8 + j;
            let idx = row * ROW_STRIDE + col * 3 + channel;
            samples[i * 8 + j] = ycocg[idx];
        }
    }
}

/// 2x2 box-filter downsample of the full 16x16 `channel` plane into an 8x8
/// block, used for 4:2:0 chroma subsampling. The rounding bias alternates
/// `0, 2, 0, 2, ...` across output columns within a row.
pub fn subsample(samples: &mut [f32; 64], ycocg: &[i16; YCOCG_BLOCK_LEN], channel: usize) {
    debug_assert!(channel == 1 || channel == 2);

    for i in 0..8 {
        for j in 0..8 {
            let r0 = 2 * i;
            let r1 = 2 * i + 1;
            let c0 = 2 * j;
            let c1 = 2 * j + 1;

            let v00 = ycocg[r0 * ROW_STRIDE + c0 * 3 + channel] as i32;
            let v01 = ycocg[r0 * ROW_STRIDE + c1 * 3 + channel] as i32;
            let v10 = ycocg[r1 * ROW_STRIDE + c0 * 3 + channel] as i32;
            let v11 = ycocg[r1 * ROW_STRIDE + c1 * 3 + channel] as i32;

            let sum = v00 + v01 + v10 + v11;
            let bias = if j % 2 == 0 { 0 } else { 2 };

            samples[i * 8 + j] = ((sum + bias) >> 2) as f32;
        }
    }
}

/// Same as [`subsample`] but writes raw `i16` output for the integer kernel.
pub fn subsample_i16(samples: &mut [i16; 64], ycocg: &[i16; YCOCG_BLOCK_LEN], channel: usize) {
    debug_assert!(channel == 1 || channel == 2);

    for i in 0..8 {
        for j in 0..8 {
            let r0 = 2 * i;
            let r1 = 2 * i + 1;
            let c0 = 2 * j;
            let c1 = 2 * j + 1;

            let v00 = ycocg[r0 * ROW_STRIDE + c0 * 3 + channel] as i32;
            let v01 = ycocg[r0 * ROW_STRIDE + c1 * 3 + channel] as i32;
            let v10 = ycocg[r1 * ROW_STRIDE + c0 * 3 + channel] as i32;
            let v11 = ycocg[r1 * ROW_STRIDE + c1 * 3 + channel] as i32;

            let sum = v00 + v01 + v10 + v11;
            let bias = if j % 2 == 0 { 0 } else { 2 };

            samples[i * 8 + j] = ((sum + bias) >> 2) as i16;
        }
    }
}

/// Repacks four 8x8 blocks (`src[0..64]`, `src[64..128]`, `src[128..192]`,
/// `src[192..256]`, read as TL, TR, BL, BR) into one 16x16 block.
pub fn merge_blocks(dst: &mut [f32; 256], src: &[f32; 256]) {
    merge_quadrants(dst, src, |v| v);
}

/// Integer-valued variant of [`merge_blocks`].
pub fn merge_blocks_i16(dst: &mut [i16; 256], src: &[i16; 256]) {
    merge_quadrants(dst, src, |v| v);
}

fn merge_quadrants<T: Copy + Default>(dst: &mut [T; 256], src: &[T; 256], id: impl Fn(T) -> T) {
    let quadrants = [(0, 0), (1, 0), (0, 1), (1, 1)];

    for (k, &(qx, qy)) in quadrants.iter().enumerate() {
        let base = k * 64;
        for i in 0..8 {
            for j in 0..8 {
                let row = qy * 8 + i;
                let col = qx * 8 + j;
                dst[row * 16 + col] = id(src[base + i * 8 + j]);
            }
        }
    }
}

/// Nearest-neighbor 2x upscale of an 8x8 block into a 16x16 block: each
/// source sample becomes a 2x2 square in the output.
pub fn scale_block(dst: &mut [f32; 256], src: &[f32; 64]) {
    for i in 0..8 {
        for j in 0..8 {
            let v = src[i * 8 + j];
            for di in 0..2 {
                for dj in 0..2 {
                    let row = i * 2 + di;
                    let col = j * 2 + dj;
                    dst[row * 16 + col] = v;
                }
            }
        }
    }
}

/// Integer-valued variant of [`scale_block`].
pub fn scale_block_i16(dst: &mut [i16; 256], src: &[i16; 64]) {
    for i in 0..8 {
        for j in 0..8 {
            let v = src[i * 8 + j];
            for di in 0..2 {
                for dj in 0..2 {
                    let row = i * 2 + di;
                    let col = j * 2 + dj;
                    dst[row * 16 + col] = v;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ycocg_with_constant_channel(channel: usize, value: i16) -> [i16; YCOCG_BLOCK_LEN] {
        let mut ycocg = [0i16; YCOCG_BLOCK_LEN];
        for i in 0..256 {
            ycocg[i * 3 + channel] = value;
        }
        ycocg
    }

    #[test]
    fn subsample_exactness_constant_chroma() {
        let ycocg = ycocg_with_constant_channel(1, 42);
        let mut out = [0f32; 64];
        subsample(&mut out, &ycocg, 1);
        assert!(out.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn subsample_checkerboard_cancels_to_zero() {
        // Co alternates +100/-100 in a checkerboard: each 2x2 average is
        // zero modulo the alternating rounding bias.
        let mut ycocg = [0i16; YCOCG_BLOCK_LEN];
        for row in 0..16 {
            for col in 0..16 {
                let v = if (row + col) % 2 == 0 { 100 } else { -100 };
                ycocg[(row * 16 + col) * 3 + 1] = v;
            }
        }

        let mut out = [0f32; 64];
        subsample(&mut out, &ycocg, 1);
        for &v in out.iter() {
            assert!(v == 0.0 || v == 0.5, "unexpected subsample value: {}", v);
        }
    }

    #[test]
    fn subblock_quadrant_indexing() {
        let mut ycocg = [0i16; YCOCG_BLOCK_LEN];
        for row in 0..16 {
            for col in 0..16 {
                ycocg[(row * 16 + col) * 3] = (row * 16 + col) as i16;
            }
        }

        let mut samp = [0f32; 64];
        subblock(&mut samp, &ycocg, 1, 1, 0);
        // Bottom-right quadrant: row 8..16, col 8..16.
        assert_eq!(samp[0], 8.0 * 16.0 + 8.0);
        assert_eq!(samp[63], 15.0 * 16.0 + 15.0);
    }

    #[test]
    fn merge_blocks_quadrant_order() {
        let mut src = [0f32; 256];
        for k in 0..4 {
            for i in 0..64 {
                src[k * 64 + i] = k as f32;
            }
        }
        let mut dst = [0f32; 256];
        merge_blocks(&mut dst, &src);

        assert_eq!(dst[0], 0.0); // TL
        assert_eq!(dst[15], 1.0); // TR
        assert_eq!(dst[8 * 16], 2.0); // BL
        assert_eq!(dst[15 * 16 + 15], 3.0); // BR
    }

    #[test]
    fn scale_block_doubles_each_sample() {
        let mut src = [0f32; 64];
        for i in 0..64 {
            src[i] = i as f32;
        }
        let mut dst = [0f32; 256];
        scale_block(&mut dst, &src);

        for i in 0..8 {
            for j in 0..8 {
                let v = src[i * 8 + j];
                assert_eq!(dst[(2 * i) * 16 + 2 * j], v);
                assert_eq!(dst[(2 * i) * 16 + 2 * j + 1], v);
                assert_eq!(dst[(2 * i + 1) * 16 + 2 * j], v);
                assert_eq!(dst[(2 * i + 1) * 16 + 2 * j + 1], v);
            }
        }
    }
}
