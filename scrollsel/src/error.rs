use thiserror::Error;

/// Errors raised while building a selector.
///
/// Once constructed, a selector never fails: out-of-range requests are
/// clamped or ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The value list was empty.
    #[error("a selector needs at least one option")]
    NoOptions,
}
