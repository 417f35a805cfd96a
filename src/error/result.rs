//! Result type alias for MentalMuse operations.

use super::muse_error::MuseError;

/// Type alias for Results using MuseError.
pub type MuseResult<T> = Result<T, MuseError>;
