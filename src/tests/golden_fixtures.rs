//! Fixed inputs with hard-coded expected outputs.
//!
//! The same expectations must hold in every build configuration: run the
//! suite with `--features portable`, with
//! `RUSTFLAGS="-C target-feature=+ssse3"` and with
//! `RUSTFLAGS="-C target-feature=+avx2,+aes"` to show the backends agree bit
//! for bit.

use crate::lanes::{I16x16, I64x4, I8x32};
use crate::randomness::get_randomness;
use crate::simd::*;

pub const A16: I16x16 = I16x16([i16::MIN, 32767, -1, 0, 1, -2, 2, 12345, -12345, 300, -300, 16384, -16384, 7, -7, 255]);
pub const B16: I16x16 = I16x16([1, -1, 0, 32767, i16::MIN, 5, -5, 0, 12345, -301, 300, -16384, 16384, 0, 9, -255]);
pub const A64: I64x4 = I64x4([81985529216486895, -1, i64::MIN, 9151594818298642687]);
pub const B64: I64x4 = I64x4([71777214294589695, 6148914691236517205, -1, 4660]);
pub const A8: I8x32 = I8x32([-100, -63, -26, 11, 48, 85, 122, -97, -60, -23, 14, 51, 88, 125, -94, -57, -20, 17, 54, 91, -128, -91, -54, -17, 20, 57, 94, -125, -88, -51, -14, 23]);
pub const CTL8: I8x32 = I8x32([0, 15, -128, -113, 16, 31, 127, -1, 3, 5, 10, 12, 65, -110, 6, 14, 15, 0, 1, -127, 34, 61, 112, -16, 8, 9, 4, -124, 11, 107, 7, -57]);

pub const VALUE: u128 = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210;

#[test]
fn test_golden_add_sub() {
    assert_eq!(m256_add_epi16(&A16, &B16).0, [-32767, 32766, -1, 32767, -32767, 3, -3, 12345, 0, -1, 0, 0, 0, 7, 2, 0]);
    assert_eq!(m256_sub_epi16(&A16, &B16).0, [32767, i16::MIN, -1, -32767, -32767, -7, 7, 12345, -24690, 601, -600, i16::MIN, i16::MIN, 7, -16, 510]);
}

#[test]
fn test_golden_hadd() {
    assert_eq!(m256_hadd_epi16(&A16, &B16).0, [-1, -1, -1, 12347, 0, 32767, -32763, -5, -12045, 16084, -16377, 248, 12044, -16084, 16384, -246]);
}

#[test]
fn test_golden_bitwise() {
    assert_eq!(m256_and_epi64(&A64, &B64).0, [9852066577711343, 6148914691236517205, i64::MIN, 52]);
    assert_eq!(m256_or_epi64(&A64, &B64).0, [143910676933365247, -1, -1, 9151594818298647295]);
    assert_eq!(m256_xor_epi64(&A64, &B64).0, [134058610355653904, -6148914691236517206, 9223372036854775807, 9151594818298647243]);
    assert_eq!(m256_xor_epi64(&A64, &A64), I64x4::splat(0));
}

#[test]
fn test_golden_cmpgt() {
    assert_eq!(m256_cmpgt_epi16(&A16, &B16).0, [0, -1, 0, 0, -1, 0, -1, -1, 0, -1, 0, -1, 0, -1, 0, -1]);
}

#[test]
fn test_golden_shuffle() {
    assert_eq!(m256_shuffle_epi8(&A8, &CTL8).0, [-100, -57, 0, 0, -100, -57, -57, 0, 11, 85, 14, 88, -63, 0, 122, -94, 23, -20, 17, 0, 54, -51, -20, 0, 20, 57, -128, 0, -125, -125, -17, 0]);
}

#[test]
fn test_golden_sign() {
    assert_eq!(m256_sign_epi16(&A16, &B16).0, [i16::MIN, -32767, 0, 0, -1, -2, -2, 0, -12345, -300, -300, -16384, -16384, 0, -7, -255]);
}

#[test]
fn test_golden_abs() {
    assert_eq!(m256_abs_epi16(&A16).0, [i16::MIN, 32767, 1, 0, 1, 2, 2, 12345, 12345, 300, 300, 16384, 16384, 7, 7, 255]);
}

#[test]
fn test_golden_shifts() {
    assert_eq!(m256_slli_epi16::<0>(&A16), A16);
    assert_eq!(m256_srli_epi16::<0>(&A16), A16);
    assert_eq!(m256_slli_epi16::<1>(&A16).0, [0, -2, -2, 0, 2, -4, 4, 24690, -24690, 600, -600, i16::MIN, i16::MIN, 14, -14, 510]);
    assert_eq!(m256_srli_epi16::<1>(&A16).0, [16384, 16383, 32767, 0, 0, 32767, 1, 6172, 26595, 150, 32618, 8192, 24576, 3, 32764, 127]);
    assert_eq!(m256_slli_epi16::<7>(&A16).0, [0, -128, -128, 0, 128, -256, 256, 7296, -7296, -27136, 27136, 0, 0, 896, -896, 32640]);
    assert_eq!(m256_srli_epi16::<7>(&A16).0, [256, 255, 511, 0, 0, 511, 0, 96, 415, 2, 509, 128, 384, 0, 511, 1]);
    assert_eq!(m256_slli_epi16::<15>(&A16).0, [0, i16::MIN, i16::MIN, 0, i16::MIN, 0, 0, i16::MIN, i16::MIN, 0, 0, 0, 0, i16::MIN, i16::MIN, i16::MIN]);
    assert_eq!(m256_srli_epi16::<15>(&A16).0, [1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(m256_slli_epi16::<16>(&A16), I16x16::splat(0));
    assert_eq!(m256_srli_epi16::<16>(&A16), I16x16::splat(0));
}

#[test]
fn test_golden_permute() {
    assert_eq!(m256_permute4x64_epi64::<0x00>(&A64).0, [81985529216486895, 81985529216486895, 81985529216486895, 81985529216486895]);
    assert_eq!(m256_permute4x64_epi64::<0x1B>(&A64).0, [9151594818298642687, i64::MIN, -1, 81985529216486895]);
    assert_eq!(m256_permute4x64_epi64::<0x4E>(&A64).0, [i64::MIN, 9151594818298642687, 81985529216486895, -1]);
    assert_eq!(m256_permute4x64_epi64::<0xD8>(&A64).0, [81985529216486895, i64::MIN, -1, 9151594818298642687]);
    assert_eq!(m256_permute4x64_epi64::<0x93>(&A64).0, [9151594818298642687, 81985529216486895, -1, i64::MIN]);

    assert_eq!(
        m256_permute4x64_epi16::<0x00>(&A16).0,
        [i16::MIN, 32767, -1, 0, i16::MIN, 32767, -1, 0, i16::MIN, 32767, -1, 0, i16::MIN, 32767, -1, 0]
    );
    assert_eq!(
        m256_permute4x64_epi16::<0x1B>(&A16).0,
        [-16384, 7, -7, 255, -12345, 300, -300, 16384, 1, -2, 2, 12345, i16::MIN, 32767, -1, 0]
    );
    assert_eq!(
        m256_permute4x64_epi16::<0x4E>(&A16).0,
        [-12345, 300, -300, 16384, -16384, 7, -7, 255, i16::MIN, 32767, -1, 0, 1, -2, 2, 12345]
    );
    assert_eq!(
        m256_permute4x64_epi16::<0xD8>(&A16).0,
        [i16::MIN, 32767, -1, 0, -12345, 300, -300, 16384, 1, -2, 2, 12345, -16384, 7, -7, 255]
    );
    assert_eq!(
        m256_permute4x64_epi16::<0x93>(&A16).0,
        [-16384, 7, -7, 255, i16::MIN, 32767, -1, 0, 1, -2, 2, 12345, -12345, 300, -300, 16384]
    );
}

#[test]
fn test_golden_broadcast() {
    assert_eq!(m256_broadcastsi128_si256(VALUE).0, [12816, 30292, -17768, -292, -12817, -30293, 17767, 291, 12816, 30292, -17768, -292, -12817, -30293, 17767, 291]);
}

#[test]
fn test_golden_randomness() {
    let mut gstate_1 = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3211_u128;
    let mut gstate_2 = 0x0f1e_2d3c_4b5a_6978_8796_a5b4_c3d2_e1f1_u128;

    #[cfg(not(feature = "aes-mix"))]
    let expected = [
        0x31cd4eedc4373b0575a2cffd2a5784b1_u128,
        0xa4afc094d4075389d34fdd00f7209613_u128,
        0x162ab56cd8d93cdd5b7133da0dfb3a98_u128,
    ];
    #[cfg(feature = "aes-mix")]
    let expected = [
        0x06d44ca48ccd4af977664efd387f6c38_u128,
        0x294e6b25eef194ce42ce35d28beef844_u128,
        0x2a745e59729f38348d122b9c1c99938d_u128,
    ];

    for want in expected {
        assert_eq!(get_randomness(&mut gstate_1, &mut gstate_2), want);
    }
    assert_eq!(gstate_1, 0x3b2bcc5d2d1b19f0162ab56cd8d93cdd_u128);
    assert_eq!(gstate_2, 0x5b7133da0dfb3a989acca1cbe1f5eb3d_u128);
}
