//! Fixed-width lane sequences.
//!
//! Every 256-bit value in this crate is one of three array newtypes, told
//! apart by element width. The length is part of the type, so an operation
//! can never be handed the wrong number of lanes. All three are 32-byte
//! aligned so the AVX2 paths can use aligned loads and stores.
//!
//! Viewing one layout as another always goes through an explicit
//! little-endian byte copy (`to_le_bytes` / `from_le_bytes`). The bit pattern
//! is unchanged; no pointer casts between lane types exist outside the
//! intrinsic backends.

use byteorder::{ByteOrder, LittleEndian};
use std::ops::{Index, IndexMut};

use crate::error::{IntrinsicsError, Result};

/// Size in bytes of every lane sequence.
pub const VECTOR_BYTES: usize = 32;

macro_rules! lane_type {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $lanes:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(C, align(32))]
        pub struct $name(pub [$elem; $lanes]);

        impl $name {
            /// Number of lanes.
            pub const LANES: usize = $lanes;

            pub const fn new(lanes: [$elem; $lanes]) -> Self {
                Self(lanes)
            }

            pub const fn splat(value: $elem) -> Self {
                Self([value; $lanes])
            }

            pub const fn to_array(self) -> [$elem; $lanes] {
                self.0
            }

            pub fn as_slice(&self) -> &[$elem] {
                &self.0
            }
        }

        impl From<[$elem; $lanes]> for $name {
            fn from(lanes: [$elem; $lanes]) -> Self {
                Self(lanes)
            }
        }

        impl From<$name> for [$elem; $lanes] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[$elem]> for $name {
            type Error = IntrinsicsError;

            fn try_from(slice: &[$elem]) -> Result<Self> {
                let lanes: [$elem; $lanes] =
                    slice
                        .try_into()
                        .map_err(|_| IntrinsicsError::InvalidDimension {
                            expected: $lanes,
                            got: slice.len(),
                        })?;
                Ok(Self(lanes))
            }
        }

        impl Index<usize> for $name {
            type Output = $elem;

            fn index(&self, lane: usize) -> &$elem {
                &self.0[lane]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, lane: usize) -> &mut $elem {
                &mut self.0[lane]
            }
        }
    };
}

/// Marker for the 32-byte, 32-byte-aligned lane types, which the intrinsic
/// backends load and store directly.
#[cfg_attr(not(any(intrin_sse2, intrin_avx2)), allow(dead_code))]
pub(crate) trait Packed256: Copy + Default {}

impl Packed256 for I16x16 {}
impl Packed256 for I64x4 {}
impl Packed256 for I8x32 {}

lane_type!(
    /// Sixteen signed 16-bit lanes.
    I16x16,
    i16,
    16
);

lane_type!(
    /// Four signed 64-bit lanes.
    I64x4,
    i64,
    4
);

lane_type!(
    /// Thirty-two signed 8-bit lanes.
    I8x32,
    i8,
    32
);

impl I16x16 {
    pub fn from_le_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        let mut lanes = [0i16; 16];
        LittleEndian::read_i16_into(&bytes, &mut lanes);
        Self(lanes)
    }

    pub fn to_le_bytes(&self) -> [u8; VECTOR_BYTES] {
        let mut bytes = [0u8; VECTOR_BYTES];
        LittleEndian::write_i16_into(&self.0, &mut bytes);
        bytes
    }

    /// Builds the vector from its two 128-bit halves (lanes 0..8, lanes 8..16).
    pub fn from_u128_halves(low: u128, high: u128) -> Self {
        let mut bytes = [0u8; VECTOR_BYTES];
        LittleEndian::write_u128(&mut bytes[..16], low);
        LittleEndian::write_u128(&mut bytes[16..], high);
        Self::from_le_bytes(bytes)
    }

    /// Lanes 0..8 as one 128-bit value.
    pub fn low_u128(&self) -> u128 {
        LittleEndian::read_u128(&self.to_le_bytes()[..16])
    }

    /// Lanes 8..16 as one 128-bit value.
    pub fn high_u128(&self) -> u128 {
        LittleEndian::read_u128(&self.to_le_bytes()[16..])
    }

    pub fn to_i64x4(&self) -> I64x4 {
        I64x4::from_le_bytes(self.to_le_bytes())
    }

    pub fn to_i8x32(&self) -> I8x32 {
        I8x32::from_le_bytes(self.to_le_bytes())
    }
}

impl I64x4 {
    pub fn from_le_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        let mut lanes = [0i64; 4];
        LittleEndian::read_i64_into(&bytes, &mut lanes);
        Self(lanes)
    }

    pub fn to_le_bytes(&self) -> [u8; VECTOR_BYTES] {
        let mut bytes = [0u8; VECTOR_BYTES];
        LittleEndian::write_i64_into(&self.0, &mut bytes);
        bytes
    }

    pub fn to_i16x16(&self) -> I16x16 {
        I16x16::from_le_bytes(self.to_le_bytes())
    }
}

impl I8x32 {
    pub fn from_le_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        Self(bytes.map(|b| b as i8))
    }

    pub fn to_le_bytes(&self) -> [u8; VECTOR_BYTES] {
        self.0.map(|b| b as u8)
    }

    pub fn to_i16x16(&self) -> I16x16 {
        I16x16::from_le_bytes(self.to_le_bytes())
    }
}
