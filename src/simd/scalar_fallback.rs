//! Portable implementations of every operation.
//!
//! These are the reference semantics: every intrinsic-backed path in
//! `sse.rs`, `avx2.rs` and `aesni.rs` must produce bit-identical results.
//! Each loop is fixed-trip-count and branch-free so that the compiler can
//! still vectorise it when no wide instruction is selected.
//!
//! None of these functions check the aliasing precondition; the dispatching
//! wrappers in `simd/mod.rs` do that once for every backend.

use crate::bit_patterns::{Selector, ShiftAmount};
use crate::lanes::{I16x16, I64x4, I8x32};

/// All bits set in a 16-bit lane (`0xFFFF`).
const LANE_MASK_I16: i16 = -1;

/// Branchless signum of a 16-bit lane: 1, 0 or -1.
///
/// The comparisons and the subtraction all stay in `i16`; the result feeds
/// straight into the wrapping 16-bit multiply in `sign_epi16_scalar`.
#[inline]
pub const fn e_sign(value: i16) -> i16 {
    (0 < value) as i16 - (value < 0) as i16
}

#[inline]
pub fn add_epi16_scalar(a: &I16x16, b: &I16x16) -> I16x16 {
    let mut c = I16x16::default();
    for i in 0..16 {
        c.0[i] = a.0[i].wrapping_add(b.0[i]);
    }
    c
}

#[inline]
pub fn sub_epi16_scalar(a: &I16x16, b: &I16x16) -> I16x16 {
    let mut c = I16x16::default();
    for i in 0..16 {
        c.0[i] = a.0[i].wrapping_sub(b.0[i]);
    }
    c
}

/// Horizontal add of adjacent pairs, one 128-bit half at a time.
///
/// Within each half the first four results come from `a` and the next four
/// from `b`; lanes never cross the half boundary.
#[inline]
pub fn hadd_epi16_scalar(a: &I16x16, b: &I16x16) -> I16x16 {
    let mut c = I16x16::default();
    for half in [0, 8] {
        for j in 0..4 {
            c.0[half + j] = a.0[half + 2 * j].wrapping_add(a.0[half + 2 * j + 1]);
            c.0[half + 4 + j] = b.0[half + 2 * j].wrapping_add(b.0[half + 2 * j + 1]);
        }
    }
    c
}

#[inline]
pub fn and_epi64_scalar(a: &I64x4, b: &I64x4) -> I64x4 {
    let mut c = I64x4::default();
    for i in 0..4 {
        c.0[i] = a.0[i] & b.0[i];
    }
    c
}

#[inline]
pub fn or_epi64_scalar(a: &I64x4, b: &I64x4) -> I64x4 {
    let mut c = I64x4::default();
    for i in 0..4 {
        c.0[i] = a.0[i] | b.0[i];
    }
    c
}

#[inline]
pub fn xor_epi64_scalar(a: &I64x4, b: &I64x4) -> I64x4 {
    let mut c = I64x4::default();
    for i in 0..4 {
        c.0[i] = a.0[i] ^ b.0[i];
    }
    c
}

/// `0xFFFF` where `a > b`, else zero. The comparison result (0 or 1) is
/// multiplied by the all-ones lane rather than selected with a branch.
#[inline]
pub fn cmpgt_epi16_scalar(a: &I16x16, b: &I16x16) -> I16x16 {
    let mut c = I16x16::default();
    for i in 0..16 {
        c.0[i] = (a.0[i] > b.0[i]) as i16 * LANE_MASK_I16;
    }
    c
}

/// Byte shuffle confined to each 16-byte half.
///
/// For control byte `ctl`: a set top bit yields zero, otherwise the low
/// nibble indexes the same half of `a`. The zeroing is a multiply by the
/// inverted top bit so the loop body has no branch.
#[inline]
pub fn shuffle_epi8_scalar(a: &I8x32, b: &I8x32) -> I8x32 {
    let mut c = I8x32::default();
    for half in [0, 16] {
        for i in 0..16 {
            let ctl = b.0[half + i] as u8;
            let keep = ((ctl >> 7) ^ 1) as i8;
            let pos = (ctl & 0x0F) as usize;
            c.0[half + i] = a.0[half + pos].wrapping_mul(keep);
        }
    }
    c
}

/// `a`, zero or `-a` per lane according to the sign of `b`.
/// `-i16::MIN` wraps back to `i16::MIN`, as the instruction does.
#[inline]
pub fn sign_epi16_scalar(a: &I16x16, b: &I16x16) -> I16x16 {
    let mut c = I16x16::default();
    for i in 0..16 {
        c.0[i] = a.0[i].wrapping_mul(e_sign(b.0[i]));
    }
    c
}

#[inline]
pub fn permute4x64_epi64_scalar<const IMM8: i32>(a: &I64x4) -> I64x4 {
    let [zero, first, second, third] = Selector::<IMM8>::LANES;
    I64x4([a.0[zero], a.0[first], a.0[second], a.0[third]])
}

/// `permute4x64_epi64` on a 16-bit view: each selector field moves a block
/// of four consecutive lanes, keeping their order inside the block.
#[inline]
pub fn permute4x64_epi16_scalar<const IMM8: i32>(a: &I16x16) -> I16x16 {
    let lanes = Selector::<IMM8>::LANES;
    let mut b = I16x16::default();
    for (group, &src) in lanes.iter().enumerate() {
        b.0[4 * group..4 * group + 4].copy_from_slice(&a.0[4 * src..4 * src + 4]);
    }
    b
}

/// Left shift by a compile-time amount. The shift happens in a `u32` so that
/// an amount of 16 clears the lane instead of overflowing.
#[inline]
pub fn slli_epi16_scalar<const IMM8: i32>(a: &I16x16) -> I16x16 {
    let amount = ShiftAmount::<IMM8>::BITS;
    let mut b = I16x16::default();
    for i in 0..16 {
        b.0[i] = ((a.0[i] as u16 as u32) << amount) as u16 as i16;
    }
    b
}

/// Logical right shift: the lane is reinterpreted as `u16` first so zeros,
/// not copies of the sign bit, are shifted in.
#[inline]
pub fn srli_epi16_scalar<const IMM8: i32>(a: &I16x16) -> I16x16 {
    let amount = ShiftAmount::<IMM8>::BITS;
    let mut b = I16x16::default();
    for i in 0..16 {
        b.0[i] = ((a.0[i] as u16 as u32) >> amount) as u16 as i16;
    }
    b
}

/// Branchless absolute value: `(x ^ m) - m` where `m` is the sign smeared
/// across the lane. `i16::MIN` maps to itself.
#[inline]
pub fn abs_epi16_scalar(a: &I16x16) -> I16x16 {
    let mut b = I16x16::default();
    for i in 0..16 {
        let sign_extend = a.0[i] >> (i16::BITS - 1);
        b.0[i] = (a.0[i] ^ sign_extend).wrapping_sub(sign_extend);
    }
    b
}

/// Copies the 128-bit value into both halves, byte for byte.
#[inline]
pub fn broadcastsi128_si256_scalar(value: u128) -> I16x16 {
    I16x16::from_u128_halves(value, value)
}

/// One AES encryption round (ShiftRows, SubBytes, MixColumns, then XOR with
/// `round_key`), bit-identical to `_mm_aesenc_si128`.
///
/// Only used for fast mixing; the table lookups are not constant time.
pub fn aesenc_si128_scalar(state: u128, round_key: u128) -> u128 {
    let s = state.to_le_bytes();

    // SubBytes and ShiftRows together: byte (row r, column c) lives at 4c + r.
    let mut shifted = [0u8; 16];
    for c in 0..4 {
        for r in 0..4 {
            shifted[4 * c + r] = SBOX[s[4 * ((c + r) % 4) + r] as usize];
        }
    }

    let mut out = [0u8; 16];
    for c in 0..4 {
        let col = &shifted[4 * c..4 * c + 4];
        let doubled = [xtime(col[0]), xtime(col[1]), xtime(col[2]), xtime(col[3])];
        for r in 0..4 {
            // 2*a[r] ^ 3*a[r+1] ^ a[r+2] ^ a[r+3]
            out[4 * c + r] = doubled[r]
                ^ doubled[(r + 1) % 4]
                ^ col[(r + 1) % 4]
                ^ col[(r + 2) % 4]
                ^ col[(r + 3) % 4];
        }
    }

    u128::from_le_bytes(out) ^ round_key
}

/// Multiplication by `x` in GF(2^8) modulo the AES polynomial.
const fn xtime(b: u8) -> u8 {
    (b << 1) ^ (((b >> 7) & 1) * 0x1B)
}

/// The AES S-box, derived at compile time: the multiplicative inverse comes
/// from log/antilog tables over the generator 3, followed by the affine map.
const SBOX: [u8; 256] = {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut power = 1u8;
    let mut i = 0;
    while i < 255 {
        exp[i] = power;
        log[power as usize] = i as u8;
        power ^= xtime(power);
        i += 1;
    }

    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        let inverse = if x == 0 {
            0
        } else {
            exp[(255 - log[x] as usize) % 255]
        };
        table[x] = inverse
            ^ inverse.rotate_left(1)
            ^ inverse.rotate_left(2)
            ^ inverse.rotate_left(3)
            ^ inverse.rotate_left(4)
            ^ 0x63;
        x += 1;
    }
    table
};
