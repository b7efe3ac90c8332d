use thiserror::Error;

/// Errors surfaced by struct resolution and everything built on top of it.
///
/// Malformed tag tokens are deliberately not an error: they are dropped with
/// a warning so that the absence of one tag key never blocks lookup of
/// another (see the `tag` module).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructError {
    /// The value's type, after unwrapping pointers, slices, and arrays,
    /// is not a struct. Binding and generation cannot proceed without a
    /// record shape, so this is surfaced rather than swallowed.
    #[error("given value of kind `{kind}` does not resolve to a struct type")]
    NotStruct { kind: &'static str },
}
