//! Fast, non-cryptographic 128-bit randomness for inner loops.
//!
//! WARNING: nothing here is suitable for cryptography or for statistics that
//! need a well-studied generator. It exists because bucketing inner loops need
//! a cheap source of "different enough" bits and nothing more.
//!
//! Both strategies first advance each accumulator with a 128-bit Lehmer step
//! (`s = s * 0xda942042e4dd85b5 mod 2^128`) and then combine them:
//!
//! - default: interleave, `(s1 << 64) | (s2 >> 64)`
//! - `aes-mix` feature: one AES encryption round of `s1` keyed by `s2`
//!   (AES-NI when the target has it, a bit-identical software round otherwise)
//!
//! The strategy is a build-time choice; the instruction set never changes the
//! output.

use byteorder::{ByteOrder, LittleEndian};
use rand_core::{impls, RngCore, SeedableRng};

/// Multiplier of the Lehmer step.
pub const LEHMER_MULTIPLIER: u128 = 0xda94_2042_e4dd_85b5;

/// Name of the mixing strategy compiled in.
#[cfg(not(feature = "aes-mix"))]
pub const STRATEGY: &str = "lehmer";
#[cfg(feature = "aes-mix")]
pub const STRATEGY: &str = "aes-mix";

#[inline]
fn lehmer_step(state: &mut u128) {
    *state = state.wrapping_mul(LEHMER_MULTIPLIER);
}

#[cfg(not(feature = "aes-mix"))]
#[inline]
fn mix(s1: u128, s2: u128) -> u128 {
    (s1 << 64) | (s2 >> 64)
}

#[cfg(feature = "aes-mix")]
#[inline]
fn mix(s1: u128, s2: u128) -> u128 {
    #[cfg(intrin_aes)]
    {
        unsafe { crate::simd::aesni::aesenc_si128_aesni(s1, s2) }
    }
    #[cfg(not(intrin_aes))]
    {
        crate::simd::scalar_fallback::aesenc_si128_scalar(s1, s2)
    }
}

/// Advances both accumulators and returns a new 128-bit value derived from
/// them.
///
/// The accumulators should be odd: a Lehmer step keeps an even state even,
/// and a zero state stays zero forever. [`RandomState`] enforces this.
#[inline]
pub fn get_randomness(gstate_1: &mut u128, gstate_2: &mut u128) -> u128 {
    lehmer_step(gstate_1);
    lehmer_step(gstate_2);
    mix(*gstate_1, *gstate_2)
}

/// Owned accumulator pair for [`get_randomness`].
///
/// Each thread should own its own `RandomState`; sharing one across threads
/// needs external locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomState {
    gstate_1: u128,
    gstate_2: u128,
}

impl RandomState {
    /// Creates a state from two seeds. The low bit of each is forced to one.
    pub fn new(seed_1: u128, seed_2: u128) -> Self {
        Self {
            gstate_1: seed_1 | 1,
            gstate_2: seed_2 | 1,
        }
    }

    pub fn next_u128(&mut self) -> u128 {
        get_randomness(&mut self.gstate_1, &mut self.gstate_2)
    }

    /// Current accumulator values.
    pub fn states(&self) -> (u128, u128) {
        (self.gstate_1, self.gstate_2)
    }
}

impl SeedableRng for RandomState {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        log::debug!("seeding randomness state ({} strategy)", STRATEGY);
        Self::new(
            LittleEndian::read_u128(&seed[..16]),
            LittleEndian::read_u128(&seed[16..]),
        )
    }
}

/// Lets the state drive `rand` APIs. It deliberately does not implement
/// `CryptoRng`.
impl RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// The low 64 output bits. Under the default strategy these are the high
    /// bits of the second accumulator, the best-mixed bits of a Lehmer state.
    fn next_u64(&mut self) -> u64 {
        self.next_u128() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
