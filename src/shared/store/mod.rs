pub mod filters;

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// True when a write was rejected by a unique index (server code 11000).
/// The pre-checks in the application layer are advisory; this is how the
/// store's own uniqueness enforcement is recognised and translated.
pub fn is_duplicate_key_error(err: &Error) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
