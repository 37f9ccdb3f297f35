//! Public façade tying a [`DctKernel`] choice to the quality-scaled
//! tables [`crate::quantization`] builds and the block transforms in
//! [`crate::fdct`]/[`crate::idct_int`] consume. Blocks encoded with one
//! kernel must be decoded with the same kernel; the kernel choice (like
//! quality) is a stream-wide property a caller tracks alongside its
//! data, not something this crate infers from the bitstream.

use crate::quantization::{aan_scaled_qtable, csf_from_qtable, quantization_table};
use crate::tables::{BASE_CHROMA, BASE_LUMA};

/// Which of the two DCT kernels a stream of encoded blocks uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DctKernel {
    /// The floating-point Arai-Agui-Nakajima kernel (`fdct.rs`).
    FloatAan,
    /// The integer Bink-2-style lifting kernel (`idct_int.rs`).
    IntegerBink2,
}

/// Combined luma/chroma table pair for the float kernel: `(Qfdct, Qidct)`.
pub struct FloatQTables {
    pub fdct_luma: [f32; 64],
    pub idct_luma: [f32; 64],
    pub fdct_chroma: [f32; 64],
    pub idct_chroma: [f32; 64],
}

/// Combined luma/chroma table pair for the integer kernel. `fdct` and
/// `idct` are identical arrays (the integer kernel doesn't absorb AA&N
/// scaling); both are exposed so the two call sites never need to know
/// that.
pub struct IntQTables {
    pub fdct_luma: [i16; 64],
    pub idct_luma: [i16; 64],
    pub fdct_chroma: [i16; 64],
    pub idct_chroma: [i16; 64],
}

/// Builds both forward and inverse float-kernel tables for `quality` in
/// one call, per DESIGN.md's resolution of the "discarded half" open
/// question: [`qtables_encode_f`]/[`qtables_decode_f`] are thin wrappers
/// over this so neither path recomputes the CSF twice.
pub fn scaled_qtables_f(quality: u8) -> FloatQTables {
    let q_luma = quantization_table(&BASE_LUMA, quality);
    let q_chroma = quantization_table(&BASE_CHROMA, quality);

    let csf_luma = csf_from_qtable(&q_luma);
    let csf_chroma = csf_from_qtable(&q_chroma);

    let (idct_luma, fdct_luma) = aan_scaled_qtable(Some(&csf_luma));
    let (idct_chroma, fdct_chroma) = aan_scaled_qtable(Some(&csf_chroma));

    FloatQTables { fdct_luma, idct_luma, fdct_chroma, idct_chroma }
}

/// Builds both forward and inverse integer-kernel tables for `quality`.
pub fn scaled_qtables_i(quality: u8) -> IntQTables {
    let q_luma = quantization_table(&BASE_LUMA, quality);
    let q_chroma = quantization_table(&BASE_CHROMA, quality);

    IntQTables { fdct_luma: q_luma, idct_luma: q_luma, fdct_chroma: q_chroma, idct_chroma: q_chroma }
}

/// `(Qfdct_luma, Qfdct_chroma)` for the float kernel's forward transform.
pub fn qtables_encode_f(quality: u8) -> ([f32; 64], [f32; 64]) {
    let t = scaled_qtables_f(quality);
    (t.fdct_luma, t.fdct_chroma)
}

/// `(Qidct_luma, Qidct_chroma)` for the float kernel's inverse transform.
pub fn qtables_decode_f(quality: u8) -> ([f32; 64], [f32; 64]) {
    let t = scaled_qtables_f(quality);
    (t.idct_luma, t.idct_chroma)
}

/// `(Qfdct_luma, Qfdct_chroma)` for the integer kernel's forward transform.
pub fn qtables_encode_i(quality: u8) -> ([i16; 64], [i16; 64]) {
    let t = scaled_qtables_i(quality);
    (t.fdct_luma, t.fdct_chroma)
}

/// `(Qidct_luma, Qidct_chroma)` for the integer kernel's inverse transform.
pub fn qtables_decode_i(quality: u8) -> ([i16; 64], [i16; 64]) {
    let t = scaled_qtables_i(quality);
    (t.idct_luma, t.idct_chroma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_and_decode_wrappers_agree_with_combined_builder() {
        let combined = scaled_qtables_f(75);
        let (fdct_luma, fdct_chroma) = qtables_encode_f(75);
        let (idct_luma, idct_chroma) = qtables_decode_f(75);

        assert_eq!(fdct_luma, combined.fdct_luma);
        assert_eq!(fdct_chroma, combined.fdct_chroma);
        assert_eq!(idct_luma, combined.idct_luma);
        assert_eq!(idct_chroma, combined.idct_chroma);
    }

    #[test]
    fn integer_tables_share_fdct_and_idct() {
        let t = scaled_qtables_i(60);
        assert_eq!(t.fdct_luma, t.idct_luma);
        assert_eq!(t.fdct_chroma, t.idct_chroma);
    }

    #[test]
    fn kernel_variants_are_distinguishable() {
        assert_ne!(DctKernel::FloatAan, DctKernel::IntegerBink2);
    }
}
