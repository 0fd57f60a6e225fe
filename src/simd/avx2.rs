//! AVX2 implementations: one 256-bit instruction per operation.
//!
//! Only compiled when the target enables `avx2` (see `build.rs`), so every
//! caller in `simd/mod.rs` already runs on a CPU with the instruction set.
//! The lane types are 32-byte aligned, which the aligned loads and stores
//! below rely on.

use std::arch::x86_64::*;

use crate::lanes::{I16x16, I64x4, I8x32, Packed256};

/// Required memory alignment for AVX2 loads and stores: 32 bytes (256 bits)
pub const AVX2_ALIGNMENT: usize = 32;

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn load<T: Packed256>(v: &T) -> __m256i {
    let ptr = v as *const T as *const __m256i;
    debug_assert_eq!((ptr as usize) % AVX2_ALIGNMENT, 0);
    _mm256_load_si256(ptr)
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn store<T: Packed256>(v: __m256i) -> T {
    let mut out = T::default();
    _mm256_store_si256(&mut out as *mut T as *mut __m256i, v);
    out
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn hadd_epi16_avx2(a: &I16x16, b: &I16x16) -> I16x16 {
    store(_mm256_hadd_epi16(load(a), load(b)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn cmpgt_epi16_avx2(a: &I16x16, b: &I16x16) -> I16x16 {
    store(_mm256_cmpgt_epi16(load(a), load(b)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn shuffle_epi8_avx2(a: &I8x32, b: &I8x32) -> I8x32 {
    store(_mm256_shuffle_epi8(load(a), load(b)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn sign_epi16_avx2(a: &I16x16, b: &I16x16) -> I16x16 {
    store(_mm256_sign_epi16(load(a), load(b)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn permute4x64_epi64_avx2<const IMM8: i32>(a: &I64x4) -> I64x4 {
    store(_mm256_permute4x64_epi64::<IMM8>(load(a)))
}

/// The 16-bit quad permute is the 64-bit permute on the same 256 bits.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn permute4x64_epi16_avx2<const IMM8: i32>(a: &I16x16) -> I16x16 {
    store(_mm256_permute4x64_epi64::<IMM8>(load(a)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn abs_epi16_avx2(a: &I16x16) -> I16x16 {
    store(_mm256_abs_epi16(load(a)))
}

#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn broadcastsi128_si256_avx2(value: u128) -> I16x16 {
    let half = _mm_loadu_si128(&value as *const u128 as *const __m128i);
    store(_mm256_broadcastsi128_si256(half))
}
