//! Portable emulation of the 256-bit integer intrinsics used by lattice sieve
//! bucketing.
//!
//! Every operation gives the same bits whether the target has AVX2, only
//! SSE2/SSSE3, or no vector unit at all. The instruction set is chosen when
//! the crate is compiled (see `build.rs` and the `portable` feature); there
//! is no run-time CPU detection.
//!
//! ```
//! use lattice_intrinsics::{m256_hadd_epi16, m256_srli_epi16, I16x16};
//!
//! let a = I16x16::splat(-2);
//! let b = I16x16::splat(3);
//! let sums = m256_hadd_epi16(&a, &b);
//! assert_eq!(&sums.0[..8], &[-4, -4, -4, -4, 6, 6, 6, 6]);
//! assert_eq!(m256_srli_epi16::<15>(&a), I16x16::splat(1));
//! ```

pub mod bit_patterns;
pub mod error;
pub mod lanes;
pub mod randomness;
pub mod simd;

pub use bit_patterns::{pair_field, quad_field, BitPatterns, Selector, ShiftAmount};
pub use error::{ensure_distinct, IntrinsicsError, Result};
pub use lanes::{I16x16, I64x4, I8x32, VECTOR_BYTES};
pub use randomness::{get_randomness, RandomState};
pub use simd::{
    aes_hardware, e_sign, log_simd_info, m256_abs_epi16, m256_add_epi16, m256_and_epi64,
    m256_broadcastsi128_si256, m256_cmpgt_epi16, m256_hadd_epi16, m256_or_epi64,
    m256_permute4x64_epi16, m256_permute4x64_epi64, m256_shuffle_epi8, m256_sign_epi16,
    m256_slli_epi16, m256_srli_epi16, m256_sub_epi16, m256_xor_epi64, SimdCapability,
};

#[cfg(test)]
mod tests;
