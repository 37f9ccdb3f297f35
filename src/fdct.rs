//! Scaled floating-point 8x8 DCT/IDCT: the Arai-Agui-Nakajima (AA&N)
//! algorithm, in the same two-pass (rows then columns) shape as the
//! classic `jfdctflt.c`/`jidctflt.c` pair it is ported from.
//!
//! The forward transform's output is *not* a unitary DCT: it is scaled up
//! by a row/column-dependent factor that [`crate::quantization`]'s
//! `aan_scaled_qtable` absorbs into the quantization tables (`Qfdct_f`
//! divides it back out, `Qidct_f` multiplies it back in). Used with a
//! flat table of all-ones, `fdct_f` and `idct_f` are exact inverses of
//! each other up to floating-point rounding, which is what lets the
//! combined quantize/dequantize variants below share their core.

const F13: f32 = 0.707_106_8; // 1/sqrt(2)
const F05: f32 = 0.382_683_43;
const F02: f32 = 0.541_196_1;
const F04: f32 = 1.306_563; // matches spec's 1.306563965 to f32 precision

const I13: f32 = 1.414_213_6; // sqrt(2)
const I11: f32 = 1.414_213_6;
const I05: f32 = 1.847_759;
const I10: f32 = 1.082_392_2;
const I12: f32 = -2.613_126;

/// Forward AA&N 8x8 DCT. `src` should be centered (range ~[-128, 127])
/// for 8-bit image data; the output is scaled such that the DC
/// coefficient can reach magnitude ~1024 for fully-saturated input.
pub fn fdct_f(dst: &mut [f32; 64], src: &[f32; 64]) {
    let mut tmp = *src;

    // Pass 1: rows.
    for r in 0..8 {
        let o = r * 8;

        let t0 = tmp[o] + tmp[o + 7];
        let t7 = tmp[o] - tmp[o + 7];
        let t1 = tmp[o + 1] + tmp[o + 6];
        let t6 = tmp[o + 1] - tmp[o + 6];
        let t2 = tmp[o + 2] + tmp[o + 5];
        let t5 = tmp[o + 2] - tmp[o + 5];
        let t3 = tmp[o + 3] + tmp[o + 4];
        let t4 = tmp[o + 3] - tmp[o + 4];

        let t10 = t0 + t3;
        let t13 = t0 - t3;
        let t11 = t1 + t2;
        let t12 = t1 - t2;

        tmp[o] = t10 + t11;
        tmp[o + 4] = t10 - t11;

        let z1 = (t12 + t13) * F13;
        tmp[o + 2] = t13 + z1;
        tmp[o + 6] = t13 - z1;

        let u10 = t4 + t5;
        let u11 = t5 + t6;
        let u12 = t6 + t7;

        let z5 = (u10 - u12) * F05;
        let z2 = F02 * u10 + z5;
        let z4 = F04 * u12 + z5;
        let z3 = u11 * F13;

        let z11 = t7 + z3;
        let z13 = t7 - z3;

        tmp[o + 5] = z13 + z2;
        tmp[o + 3] = z13 - z2;
        tmp[o + 1] = z11 + z4;
        tmp[o + 7] = z11 - z4;
    }

    // Pass 2: columns.
    for c in 0..8 {
        let t0 = tmp[c] + tmp[56 + c];
        let t7 = tmp[c] - tmp[56 + c];
        let t1 = tmp[8 + c] + tmp[48 + c];
        let t6 = tmp[8 + c] - tmp[48 + c];
        let t2 = tmp[16 + c] + tmp[40 + c];
        let t5 = tmp[16 + c] - tmp[40 + c];
        let t3 = tmp[24 + c] + tmp[32 + c];
        let t4 = tmp[24 + c] - tmp[32 + c];

        let t10 = t0 + t3;
        let t13 = t0 - t3;
        let t11 = t1 + t2;
        let t12 = t1 - t2;

        dst[c] = t10 + t11;
        dst[32 + c] = t10 - t11;

        let z1 = (t12 + t13) * F13;
        dst[16 + c] = t13 + z1;
        dst[48 + c] = t13 - z1;

        let u10 = t4 + t5;
        let u11 = t5 + t6;
        let u12 = t6 + t7;

        let z5 = (u10 - u12) * F05;
        let z2 = F02 * u10 + z5;
        let z4 = F04 * u12 + z5;
        let z3 = u11 * F13;

        let z11 = t7 + z3;
        let z13 = t7 - z3;

        dst[40 + c] = z13 + z2;
        dst[24 + c] = z13 - z2;
        dst[8 + c] = z11 + z4;
        dst[56 + c] = z11 - z4;
    }
}

/// `fdct_f` followed by an elementwise multiply by `q` (`Qfdct_f`), in
/// one pass over `dst` as the spec describes.
pub fn fdct_fq(dst: &mut [f32; 64], src: &[f32; 64], q: &[f32; 64]) {
    fdct_f(dst, src);
    for i in 0..64 {
        dst[i] *= q[i];
    }
}

/// Shared inverse-transform core. `quant`, when present, is multiplied
/// into each coefficient as it is loaded for the column pass (pass 1);
/// the row pass (pass 2) never touches `quant`. Passing `None` is
/// equivalent to passing an all-ones table.
fn idct_core(dst: &mut [f32; 64], src: &[f32; 64], quant: Option<&[f32; 64]>) {
    let load = |i: usize| -> f32 {
        match quant {
            Some(q) => src[i] * q[i],
            None => src[i],
        }
    };

    let mut ws = [0f32; 64];

    // Pass 1: columns.
    for c in 0..8 {
        let t0 = load(c);
        let t1 = load(16 + c);
        let t2 = load(32 + c);
        let t3 = load(48 + c);

        let t10 = t0 + t2;
        let t11 = t0 - t2;
        let t13 = t1 + t3;
        let t12 = (t1 - t3) * I13 - t13;

        let u0 = t10 + t13;
        let u3 = t10 - t13;
        let u1 = t11 + t12;
        let u2 = t11 - t12;

        let t4 = load(8 + c);
        let t5 = load(24 + c);
        let t6 = load(40 + c);
        let t7 = load(56 + c);

        let z13 = t6 + t5;
        let z10 = t6 - t5;
        let z11 = t4 + t7;
        let z12 = t4 - t7;

        let u7 = z11 + z13;
        let u11 = (z11 - z13) * I11;

        let z5 = (z10 + z12) * I05;
        let u10 = I10 * z12 - z5;
        let u12 = I12 * z10 + z5;

        let u6 = u12 - u7;
        let u5 = u11 - u6;
        let u4 = u10 + u5;

        ws[c] = u0 + u7;
        ws[56 + c] = u0 - u7;
        ws[8 + c] = u1 + u6;
        ws[48 + c] = u1 - u6;
        ws[16 + c] = u2 + u5;
        ws[40 + c] = u2 - u5;
        ws[32 + c] = u3 + u4;
        ws[24 + c] = u3 - u4;
    }

    // Pass 2: rows, no quantization.
    for r in 0..8 {
        let o = r * 8;

        let t0 = ws[o];
        let t1 = ws[o + 2];
        let t2 = ws[o + 4];
        let t3 = ws[o + 6];

        let t10 = t0 + t2;
        let t11 = t0 - t2;
        let t13 = t1 + t3;
        let t12 = (t1 - t3) * I13 - t13;

        let u0 = t10 + t13;
        let u3 = t10 - t13;
        let u1 = t11 + t12;
        let u2 = t11 - t12;

        let t4 = ws[o + 1];
        let t5 = ws[o + 3];
        let t6 = ws[o + 5];
        let t7 = ws[o + 7];

        let z13 = t6 + t5;
        let z10 = t6 - t5;
        let z11 = t4 + t7;
        let z12 = t4 - t7;

        let u7 = z11 + z13;
        let u11 = (z11 - z13) * I11;

        let z5 = (z10 + z12) * I05;
        let u10 = I10 * z12 - z5;
        let u12 = I12 * z10 + z5;

        let u6 = u12 - u7;
        let u5 = u11 - u6;
        let u4 = u10 + u5;

        dst[o] = u0 + u7;
        dst[o + 7] = u0 - u7;
        dst[o + 1] = u1 + u6;
        dst[o + 6] = u1 - u6;
        dst[o + 2] = u2 + u5;
        dst[o + 5] = u2 - u5;
        dst[o + 4] = u3 + u4;
        dst[o + 3] = u3 - u4;
    }
}

/// Inverse AA&N 8x8 DCT with no dequantization (equivalent to
/// [`idct_fd`] with an all-ones table). Exact inverse of [`fdct_f`] up
/// to floating-point rounding.
pub fn idct_f(dst: &mut [f32; 64], src: &[f32; 64]) {
    idct_core(dst, src, None);
}

/// Inverse AA&N 8x8 DCT with dequantization (`Qidct_f`) folded into the
/// column pass's load step.
pub fn idct_fd(dst: &mut [f32; 64], src: &[f32; 64], q: &[f32; 64]) {
    idct_core(dst, src, Some(q));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input(seed: u32) -> [f32; 64] {
        core::array::from_fn(|i| {
            let x = (seed.wrapping_mul(2654435761).wrapping_add(i as u32)) % 256;
            x as f32 - 128.0
        })
    }

    #[test]
    fn unitary_round_trip() {
        for seed in 0..8u32 {
            let src = sample_input(seed);
            let mut coeff = [0f32; 64];
            fdct_f(&mut coeff, &src);
            let mut back = [0f32; 64];
            idct_f(&mut back, &coeff);

            for i in 0..64 {
                let err = (back[i] - src[i]).abs();
                assert!(err < 1e-3, "sample {} seed {}: err {}", i, seed, err);
            }
        }
    }

    #[test]
    fn combined_quantize_dequantize_matches_unquantized() {
        let q = [1.0f32; 64];
        let src = sample_input(3);

        let mut coeff_plain = [0f32; 64];
        fdct_f(&mut coeff_plain, &src);

        let mut coeff_q = [0f32; 64];
        fdct_fq(&mut coeff_q, &src, &q);

        assert_eq!(coeff_plain, coeff_q);

        let mut back_plain = [0f32; 64];
        idct_f(&mut back_plain, &coeff_plain);

        let mut back_q = [0f32; 64];
        idct_fd(&mut back_q, &coeff_q, &q);

        assert_eq!(back_plain, back_q);
    }

    #[test]
    fn dc_only_block_produces_flat_output() {
        let src = [5.0f32; 64];
        let mut coeff = [0f32; 64];
        fdct_f(&mut coeff, &src);

        // Only the DC coefficient should be non-negligible for a flat block.
        for &c in coeff.iter().skip(1) {
            assert!(c.abs() < 1e-2, "unexpected AC energy: {}", c);
        }

        let mut back = [0f32; 64];
        idct_f(&mut back, &coeff);
        for &v in back.iter() {
            assert!((v - 5.0).abs() < 1e-2);
        }
    }
}
