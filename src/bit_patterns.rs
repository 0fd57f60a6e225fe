//! Named masks and shift amounts for picking apart 8-bit immediates.
//!
//! Permutation immediates pack four 2-bit lane selectors into one byte
//! (field 0 in the lowest bits). The decoders here run in const context so a
//! selector is fully resolved, and range checked, before code generation.

/// Masks and shifts for every bit, pair and quad of an 8-bit value.
pub struct BitPatterns;

impl BitPatterns {
    // Individual bits
    pub const ZERO_BIT_MASK: u8 = 0b0000_0001;
    pub const FIRST_BIT_MASK: u8 = 0b0000_0010;
    pub const SECOND_BIT_MASK: u8 = 0b0000_0100;
    pub const THIRD_BIT_MASK: u8 = 0b0000_1000;
    pub const FOURTH_BIT_MASK: u8 = 0b0001_0000;
    pub const FIFTH_BIT_MASK: u8 = 0b0010_0000;
    pub const SIXTH_BIT_MASK: u8 = 0b0100_0000;
    pub const SEVENTH_BIT_MASK: u8 = 0b1000_0000;

    pub const ZERO_BIT_SHIFT: u32 = 0;
    pub const FIRST_BIT_SHIFT: u32 = 1;
    pub const SECOND_BIT_SHIFT: u32 = 2;
    pub const THIRD_BIT_SHIFT: u32 = 3;
    pub const FOURTH_BIT_SHIFT: u32 = 4;
    pub const FIFTH_BIT_SHIFT: u32 = 5;
    pub const SIXTH_BIT_SHIFT: u32 = 6;
    pub const SEVENTH_BIT_SHIFT: u32 = 7;

    // Pairs
    pub const ZERO_PAIR_MASK: u8 = 0b0000_0011;
    pub const FIRST_PAIR_MASK: u8 = 0b0000_1100;
    pub const SECOND_PAIR_MASK: u8 = 0b0011_0000;
    pub const THIRD_PAIR_MASK: u8 = 0b1100_0000;

    pub const ZERO_PAIR_SHIFT: u32 = 0;
    pub const FIRST_PAIR_SHIFT: u32 = 2;
    pub const SECOND_PAIR_SHIFT: u32 = 4;
    pub const THIRD_PAIR_SHIFT: u32 = 6;

    // Quads (nibbles)
    pub const ZERO_QUAD_MASK: u8 = 0b0000_1111;
    pub const FIRST_QUAD_MASK: u8 = 0b1111_0000;

    pub const ZERO_QUAD_SHIFT: u32 = 0;
    pub const FIRST_QUAD_SHIFT: u32 = 4;

    pub const PAIR_MASKS: [u8; 4] = [
        Self::ZERO_PAIR_MASK,
        Self::FIRST_PAIR_MASK,
        Self::SECOND_PAIR_MASK,
        Self::THIRD_PAIR_MASK,
    ];

    pub const PAIR_SHIFTS: [u32; 4] = [
        Self::ZERO_PAIR_SHIFT,
        Self::FIRST_PAIR_SHIFT,
        Self::SECOND_PAIR_SHIFT,
        Self::THIRD_PAIR_SHIFT,
    ];

    pub const QUAD_MASKS: [u8; 2] = [Self::ZERO_QUAD_MASK, Self::FIRST_QUAD_MASK];

    pub const QUAD_SHIFTS: [u32; 2] = [Self::ZERO_QUAD_SHIFT, Self::FIRST_QUAD_SHIFT];
}

/// Extracts the `n`-th 2-bit field of `imm8`.
pub const fn pair_field(imm8: u8, n: usize) -> usize {
    ((imm8 & BitPatterns::PAIR_MASKS[n]) >> BitPatterns::PAIR_SHIFTS[n]) as usize
}

/// Extracts the `n`-th 4-bit field of `imm8`.
pub const fn quad_field(imm8: u8, n: usize) -> usize {
    ((imm8 & BitPatterns::QUAD_MASKS[n]) >> BitPatterns::QUAD_SHIFTS[n]) as usize
}

/// A permutation immediate decoded at compile time.
///
/// Naming `Selector::<IMM8>::LANES` inside a generic function forces the
/// assertions below to run when that function is instantiated, so a bad
/// immediate is a build error rather than a run-time one.
pub struct Selector<const IMM8: i32>;

impl<const IMM8: i32> Selector<IMM8> {
    /// Source lane for each of the four destination lanes.
    pub const LANES: [usize; 4] = {
        assert!(IMM8 >= 0 && IMM8 <= 0xFF, "permute selector must fit in 8 bits");
        let imm8 = IMM8 as u8;
        let lanes = [
            pair_field(imm8, 0),
            pair_field(imm8, 1),
            pair_field(imm8, 2),
            pair_field(imm8, 3),
        ];
        assert!(lanes[0] < 4, "selector field 0 out of range");
        assert!(lanes[1] < 4, "selector field 1 out of range");
        assert!(lanes[2] < 4, "selector field 2 out of range");
        assert!(lanes[3] < 4, "selector field 3 out of range");
        lanes
    };
}

/// A per-lane shift amount checked at compile time to lie in `0..=16`.
pub struct ShiftAmount<const IMM8: i32>;

impl<const IMM8: i32> ShiftAmount<IMM8> {
    pub const BITS: u32 = {
        assert!(IMM8 >= 0 && IMM8 <= 16, "16-bit lane shift must be in 0..=16");
        IMM8 as u32
    };
}
