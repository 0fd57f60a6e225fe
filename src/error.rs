use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrinsicsError {
    #[error("Invalid dimension: expected {expected}, got {got}")]
    InvalidDimension {
        expected: usize,
        got: usize,
    },

    #[error("Aliased operands: {operation} requires two distinct inputs")]
    AliasedOperands { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, IntrinsicsError>;

/// Checks the "no self-aliasing" precondition shared by AND, OR, cmpgt,
/// shuffle and sign.
///
/// Two inputs with identical contents count as aliased: the operation would
/// degenerate into a constant or the identity, which callers never intend.
pub fn ensure_distinct<T: PartialEq>(operation: &'static str, a: &T, b: &T) -> Result<()> {
    if a == b {
        return Err(IntrinsicsError::AliasedOperands { operation });
    }
    Ok(())
}

/// Panicking form of [`ensure_distinct`], used by the operations themselves.
/// Unlike `debug_assert!` this stays in release builds.
#[inline]
#[track_caller]
pub(crate) fn require_distinct<T: PartialEq>(operation: &'static str, a: &T, b: &T) {
    if let Err(err) = ensure_distinct(operation, a, b) {
        panic!("{}", err);
    }
}
