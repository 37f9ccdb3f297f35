//! Constants shared by the quantization engine and both DCT kernels:
//! the zig-zag permutation and its inverse, the two canonical JPEG
//! base quantization tables, and the AA&N per-coefficient scale factors.

/// Maps a natural (row-major) coefficient index to its position in the
/// zig-zag-ordered output stream.
///
/// Taken from the standard JPEG zig-zag sequence (Annex A, Figure A.6).
pub static ZIGZAG: [u8; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27, 20,
    13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51, 58, 59,
    52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse of [`ZIGZAG`]: maps a zig-zag index back to its natural position.
pub static ZIGZAG_INV: [u8; 64] = {
    let mut inv = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        inv[ZIGZAG[i] as usize] = i as u8;
        i += 1;
    }
    inv
};

/// Base luma quantization table, Annex K (Clause K.1) of
/// Recommendation ITU-T T.81 (1992) | ISO/IEC 10918-1:1994. Natural order.
pub static BASE_LUMA: [i16; 64] = [
    16, 11, 10, 16, 24, 40, 51, 61,
    12, 12, 14, 19, 26, 58, 60, 55,
    14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62,
    18, 22, 37, 56, 68, 109, 103, 77,
    24, 35, 55, 64, 81, 104, 113, 92,
    49, 64, 78, 87, 103, 121, 120, 101,
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Base chroma quantization table, Annex K. Natural order.
pub static BASE_CHROMA: [i16; 64] = [
    17, 18, 24, 47, 99, 99, 99, 99,
    18, 21, 26, 66, 99, 99, 99, 99,
    24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
];

/// Per-row/column AA&N scale factors. `AAN_FACTOR[r*8+c] = AAN[r] * AAN[c]`.
pub static AAN: [f32; 8] = [
    1.0,
    1.387_039_8,
    1.306_563,
    1.175_875_6,
    1.0,
    0.785_695,
    0.541_196_1,
    0.275_899_38,
];
