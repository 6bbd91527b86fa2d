//! Error and status types shared by the mutating [`Sequence`](crate::Sequence) operations.
//!
//! Every mutating operation returns a [`Result`] whose error side is a [`SequenceError`].
//! Each variant carries a stable numeric status code so callers that log or forward
//! statuses can still branch on a plain integer; `0` is reserved for success.

use core::fmt;
use std::collections::TryReserveError;

use thiserror::Error;

/// Status code reported for a successful operation.
pub const STATUS_OK: u8 = 0;

/// Result alias used throughout the crate.
pub type Result<T, E = SequenceError> = core::result::Result<T, E>;

/// Failure reasons for mutating sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u8)]
pub enum SequenceError {
    /// A required receiver was missing, or the sequence has already been released.
    #[error("required receiver is missing or has been released")]
    NullReceiver = 1,

    /// Allocating the backing store or an element copy failed.
    #[error("allocation failed")]
    AllocFailed = 2,

    /// A capacity of zero was requested.
    #[error("capacity must be at least one")]
    ZeroCapacity = 3,
}

impl SequenceError {
    /// Numeric status code of this error. Never equal to [`STATUS_OK`].
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Maps a status code back to its error, `None` for [`STATUS_OK`] and unknown codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::NullReceiver),
            2 => Some(Self::AllocFailed),
            3 => Some(Self::ZeroCapacity),
            _ => None,
        }
    }
}

impl From<TryReserveError> for SequenceError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocFailed
    }
}

/// Collapses an operation result into its status code.
pub fn status_code<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => STATUS_OK,
        Err(err) => err.code(),
    }
}

/// Returns `true` if `code` is the success status.
#[inline(always)]
pub const fn is_ok(code: u8) -> bool {
    code == STATUS_OK
}

/// Error returned by the owning push operations.
///
/// The element that could not be stored is handed back so the caller keeps
/// ownership of it.
pub struct PushError<T> {
    error: SequenceError,
    item: T,
}

impl<T> PushError<T> {
    pub(crate) fn new(error: SequenceError, item: T) -> Self {
        Self { error, item }
    }

    /// Reason the push failed.
    #[inline(always)]
    pub fn error(&self) -> SequenceError {
        self.error
    }

    /// Recovers the rejected element.
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Splits into the failure reason and the rejected element.
    pub fn into_parts(self) -> (SequenceError, T) {
        (self.error, self.item)
    }
}

impl<T> From<PushError<T>> for SequenceError {
    fn from(err: PushError<T>) -> Self {
        err.error
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push rejected: {}", self.error)
    }
}

impl<T> std::error::Error for PushError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
