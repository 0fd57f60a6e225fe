//! Operation dispatch for the 256-bit integer intrinsics.
//!
//! Each public `m256_*` function mirrors the Intel intrinsic of the same
//! name and picks exactly one implementation at compile time:
//!
//! - `avx2`: a single 256-bit instruction (target enables `avx2`)
//! - `sse`: the same instruction applied to each 128-bit half (target
//!   enables `ssse3`, or only `sse2` for cmpgt and broadcast)
//! - `scalar_fallback`: portable, branch-free loops
//!
//! The choice comes from the cfgs emitted by `build.rs` and never from a
//! run-time check, so there is no dispatch cost. Every backend produces
//! bit-identical output; `scalar_fallback` is the reference and is always
//! compiled so any build can be compared against it.
//!
//! Operations that compilers already vectorise well from a plain loop (add,
//! sub, the bitwise ops and the constant shifts) have only the portable form.
//!
//! Safety: the `unsafe` calls below only reach `#[target_feature]` functions
//! whose features the compile target is guaranteed to have, because the
//! guarding cfg is emitted only for such targets.

#[cfg(intrin_aes)]
pub mod aesni;
#[cfg(intrin_avx2)]
pub mod avx2;
pub mod scalar_fallback;
#[cfg(intrin_sse2)]
pub mod sse;

use std::fmt;

use crate::bit_patterns::{Selector, ShiftAmount};
use crate::error::require_distinct;
use crate::lanes::{I16x16, I64x4, I8x32};

pub use scalar_fallback::e_sign;

/// Instruction-set tier selected for this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdCapability {
    /// No vector instructions, or the `portable` feature is enabled
    Portable,
    /// SSE2 (128-bit cmpgt and broadcast halves)
    Sse2,
    /// SSSE3 (128-bit hadd, shuffle, sign and abs halves)
    Ssse3,
    /// AVX2 (one 256-bit instruction per operation)
    Avx2,
}

impl SimdCapability {
    /// The tier this crate was compiled for.
    pub const fn active() -> Self {
        if cfg!(intrin_avx2) {
            SimdCapability::Avx2
        } else if cfg!(intrin_ssse3) {
            SimdCapability::Ssse3
        } else if cfg!(intrin_sse2) {
            SimdCapability::Sse2
        } else {
            SimdCapability::Portable
        }
    }

    /// Width of the registers the tier computes in.
    pub const fn register_bytes(self) -> usize {
        match self {
            SimdCapability::Portable => 8,
            SimdCapability::Sse2 | SimdCapability::Ssse3 => 16,
            SimdCapability::Avx2 => 32,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SimdCapability::Portable => "portable",
            SimdCapability::Sse2 => "sse2",
            SimdCapability::Ssse3 => "ssse3",
            SimdCapability::Avx2 => "avx2",
        }
    }
}

impl fmt::Display for SimdCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the AES round used by the `aes-mix` strategy runs on AES-NI.
pub const fn aes_hardware() -> bool {
    cfg!(intrin_aes)
}

/// Logs the compile-time backend selection once, for diagnostics.
pub fn log_simd_info() {
    let capability = SimdCapability::active();
    log::info!(
        "lattice_intrinsics: backend={} register_bytes={} aes_ni={} randomness={}",
        capability,
        capability.register_bytes(),
        aes_hardware(),
        crate::randomness::STRATEGY,
    );
}

/// Lane-wise wrapping addition: `c[i] = a[i] + b[i]` modulo 2^16.
#[inline]
pub fn m256_add_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    scalar_fallback::add_epi16_scalar(a, b)
}

/// Lane-wise wrapping subtraction: `c[i] = a[i] - b[i]` modulo 2^16.
#[inline]
pub fn m256_sub_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    scalar_fallback::sub_epi16_scalar(a, b)
}

/// Horizontal pairwise addition, mirroring `_mm256_hadd_epi16`.
///
/// For each 128-bit half starting at lane `h` (0 or 8):
/// - `c[h + j] = a[h + 2j] + a[h + 2j + 1]` for `j` in 0..4
/// - `c[h + 4 + j] = b[h + 2j] + b[h + 2j + 1]` for `j` in 0..4
///
/// Sums wrap.
#[inline]
pub fn m256_hadd_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::hadd_epi16_avx2(a, b) }
    }
    #[cfg(all(intrin_ssse3, not(intrin_avx2)))]
    {
        unsafe { sse::hadd_epi16_ssse3(a, b) }
    }
    #[cfg(not(any(intrin_avx2, intrin_ssse3)))]
    {
        scalar_fallback::hadd_epi16_scalar(a, b)
    }
}

/// Bitwise AND of four 64-bit lanes, mirroring `_mm256_and_si256`.
///
/// # Panics
/// If `a == b`: AND of a value with itself is a no-op and is treated as a
/// caller bug. The check is present in every build profile.
#[inline]
#[track_caller]
pub fn m256_and_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
    require_distinct("m256_and_epi64", a, b);
    scalar_fallback::and_epi64_scalar(a, b)
}

/// Bitwise OR of four 64-bit lanes, mirroring `_mm256_or_si256`.
///
/// # Panics
/// If `a == b`, for the same reason as [`m256_and_epi64`].
#[inline]
#[track_caller]
pub fn m256_or_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
    require_distinct("m256_or_epi64", a, b);
    scalar_fallback::or_epi64_scalar(a, b)
}

/// Bitwise XOR of four 64-bit lanes, mirroring `_mm256_xor_si256`.
///
/// `a` and `b` may be the same value; `x ^ x` is the usual way to get zero.
#[inline]
pub fn m256_xor_epi64(a: &I64x4, b: &I64x4) -> I64x4 {
    scalar_fallback::xor_epi64_scalar(a, b)
}

/// Signed greater-than mask, mirroring `_mm256_cmpgt_epi16`:
/// `c[i] = 0xFFFF` if `a[i] > b[i]`, else `0`.
///
/// # Panics
/// If `a == b` (the result would always be zero; use [`m256_xor_epi64`]).
#[inline]
#[track_caller]
pub fn m256_cmpgt_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    require_distinct("m256_cmpgt_epi16", a, b);
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::cmpgt_epi16_avx2(a, b) }
    }
    #[cfg(all(intrin_sse2, not(intrin_avx2)))]
    {
        unsafe { sse::cmpgt_epi16_sse2(a, b) }
    }
    #[cfg(not(any(intrin_avx2, intrin_sse2)))]
    {
        scalar_fallback::cmpgt_epi16_scalar(a, b)
    }
}

/// Byte shuffle within each 128-bit half, mirroring `_mm256_shuffle_epi8`.
///
/// For output byte `i` in half `h`: zero if bit 7 of `b[i]` is set, otherwise
/// `a[h + (b[i] & 0x0F)]`. Bytes never move between halves.
///
/// # Panics
/// If `a == b`.
#[inline]
#[track_caller]
pub fn m256_shuffle_epi8(a: &I8x32, b: &I8x32) -> I8x32 {
    require_distinct("m256_shuffle_epi8", a, b);
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::shuffle_epi8_avx2(a, b) }
    }
    #[cfg(all(intrin_ssse3, not(intrin_avx2)))]
    {
        unsafe { sse::shuffle_epi8_ssse3(a, b) }
    }
    #[cfg(not(any(intrin_avx2, intrin_ssse3)))]
    {
        scalar_fallback::shuffle_epi8_scalar(a, b)
    }
}

/// Conditional negation, mirroring `_mm256_sign_epi16`:
/// `c[i]` is `a[i]`, `0` or `-a[i]` as `b[i]` is positive, zero or negative.
///
/// # Panics
/// If `a == b`.
#[inline]
#[track_caller]
pub fn m256_sign_epi16(a: &I16x16, b: &I16x16) -> I16x16 {
    require_distinct("m256_sign_epi16", a, b);
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::sign_epi16_avx2(a, b) }
    }
    #[cfg(all(intrin_ssse3, not(intrin_avx2)))]
    {
        unsafe { sse::sign_epi16_ssse3(a, b) }
    }
    #[cfg(not(any(intrin_avx2, intrin_ssse3)))]
    {
        scalar_fallback::sign_epi16_scalar(a, b)
    }
}

/// 64-bit lane permutation, mirroring `_mm256_permute4x64_epi64`.
///
/// `IMM8` packs four 2-bit source indices; `b[k] = a[(IMM8 >> 2k) & 3]`.
/// A selector outside `0..=255` fails to compile.
#[inline]
pub fn m256_permute4x64_epi64<const IMM8: i32>(a: &I64x4) -> I64x4 {
    let _ = Selector::<IMM8>::LANES;
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::permute4x64_epi64_avx2::<IMM8>(a) }
    }
    #[cfg(not(intrin_avx2))]
    {
        scalar_fallback::permute4x64_epi64_scalar::<IMM8>(a)
    }
}

/// [`m256_permute4x64_epi64`] on a 16-bit view: output group `k` (lanes
/// `4k..4k+4`) is input group `(IMM8 >> 2k) & 3`, copied as a block.
#[inline]
pub fn m256_permute4x64_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
    let _ = Selector::<IMM8>::LANES;
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::permute4x64_epi16_avx2::<IMM8>(a) }
    }
    #[cfg(not(intrin_avx2))]
    {
        scalar_fallback::permute4x64_epi16_scalar::<IMM8>(a)
    }
}

/// Left shift of every lane by `IMM8` bits (0..=16), mirroring
/// `_mm256_slli_epi16`. Shifting by 16 clears every lane.
#[inline]
pub fn m256_slli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
    let _ = ShiftAmount::<IMM8>::BITS;
    scalar_fallback::slli_epi16_scalar::<IMM8>(a)
}

/// Logical right shift of every lane by `IMM8` bits (0..=16), mirroring
/// `_mm256_srli_epi16`. Zeros are shifted in whatever the lane's sign.
#[inline]
pub fn m256_srli_epi16<const IMM8: i32>(a: &I16x16) -> I16x16 {
    let _ = ShiftAmount::<IMM8>::BITS;
    scalar_fallback::srli_epi16_scalar::<IMM8>(a)
}

/// Lane-wise absolute value, mirroring `_mm256_abs_epi16`.
/// `i16::MIN` has no positive counterpart and is returned unchanged.
#[inline]
pub fn m256_abs_epi16(a: &I16x16) -> I16x16 {
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::abs_epi16_avx2(a) }
    }
    #[cfg(all(intrin_ssse3, not(intrin_avx2)))]
    {
        unsafe { sse::abs_epi16_ssse3(a) }
    }
    #[cfg(not(any(intrin_avx2, intrin_ssse3)))]
    {
        scalar_fallback::abs_epi16_scalar(a)
    }
}

/// Copies a 128-bit value into both halves, mirroring
/// `_mm256_broadcastsi128_si256`. Lanes 0..8 and 8..16 both hold `value`
/// in little-endian lane order.
///
/// The portable byte copy is the branch taken whenever neither wider path is
/// compiled in, so it can never be skipped.
#[inline]
pub fn m256_broadcastsi128_si256(value: u128) -> I16x16 {
    #[cfg(intrin_avx2)]
    {
        unsafe { avx2::broadcastsi128_si256_avx2(value) }
    }
    #[cfg(all(intrin_sse2, not(intrin_avx2)))]
    {
        unsafe { sse::broadcastsi128_si256_sse2(value) }
    }
    #[cfg(not(any(intrin_avx2, intrin_sse2)))]
    {
        scalar_fallback::broadcastsi128_si256_scalar(value)
    }
}
