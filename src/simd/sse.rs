//! SSE2 / SSSE3 implementations: each 256-bit operation runs as two
//! independent 128-bit instructions, one per half.
//!
//! Every operation that needs them is "per 128-bit half" by definition
//! (hadd, shuffle, sign, abs, cmpgt), so splitting loses nothing. The
//! SSSE3-only functions are compiled only when the target enables `ssse3`.

use std::arch::x86_64::*;

use crate::lanes::{I16x16, Packed256};
#[cfg(intrin_ssse3)]
use crate::lanes::I8x32;

/// Loads 128-bit half `half` (0 = low, 1 = high) of a lane sequence.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn load_half<T: Packed256>(v: &T, half: usize) -> __m128i {
    _mm_load_si128((v as *const T as *const __m128i).add(half))
}

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn store_halves<T: Packed256>(low: __m128i, high: __m128i) -> T {
    let mut out = T::default();
    let ptr = &mut out as *mut T as *mut __m128i;
    _mm_store_si128(ptr, low);
    _mm_store_si128(ptr.add(1), high);
    out
}

#[cfg(intrin_ssse3)]
#[inline]
#[target_feature(enable = "ssse3")]
pub unsafe fn hadd_epi16_ssse3(a: &I16x16, b: &I16x16) -> I16x16 {
    store_halves(
        _mm_hadd_epi16(load_half(a, 0), load_half(b, 0)),
        _mm_hadd_epi16(load_half(a, 1), load_half(b, 1)),
    )
}

#[cfg(intrin_ssse3)]
#[inline]
#[target_feature(enable = "ssse3")]
pub unsafe fn shuffle_epi8_ssse3(a: &I8x32, b: &I8x32) -> I8x32 {
    store_halves(
        _mm_shuffle_epi8(load_half(a, 0), load_half(b, 0)),
        _mm_shuffle_epi8(load_half(a, 1), load_half(b, 1)),
    )
}

#[cfg(intrin_ssse3)]
#[inline]
#[target_feature(enable = "ssse3")]
pub unsafe fn sign_epi16_ssse3(a: &I16x16, b: &I16x16) -> I16x16 {
    store_halves(
        _mm_sign_epi16(load_half(a, 0), load_half(b, 0)),
        _mm_sign_epi16(load_half(a, 1), load_half(b, 1)),
    )
}

#[cfg(intrin_ssse3)]
#[inline]
#[target_feature(enable = "ssse3")]
pub unsafe fn abs_epi16_ssse3(a: &I16x16) -> I16x16 {
    store_halves(_mm_abs_epi16(load_half(a, 0)), _mm_abs_epi16(load_half(a, 1)))
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn cmpgt_epi16_sse2(a: &I16x16, b: &I16x16) -> I16x16 {
    store_halves(
        _mm_cmpgt_epi16(load_half(a, 0), load_half(b, 0)),
        _mm_cmpgt_epi16(load_half(a, 1), load_half(b, 1)),
    )
}

#[inline]
#[target_feature(enable = "sse2")]
pub unsafe fn broadcastsi128_si256_sse2(value: u128) -> I16x16 {
    let half = _mm_loadu_si128(&value as *const u128 as *const __m128i);
    store_halves(half, half)
}
