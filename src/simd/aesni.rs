//! AES-NI round used by the `aes-mix` randomness strategy.

use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "aes,sse2")]
pub unsafe fn aesenc_si128_aesni(state: u128, round_key: u128) -> u128 {
    let s = _mm_loadu_si128(&state as *const u128 as *const __m128i);
    let k = _mm_loadu_si128(&round_key as *const u128 as *const __m128i);
    let mut out = 0u128;
    _mm_storeu_si128(&mut out as *mut u128 as *mut __m128i, _mm_aesenc_si128(s, k));
    out
}
