//! Unified error handling for MentalMuse.
//!
//! Domain errors (auth, network, storage, capture) each know their own
//! user message and error code; `MuseError` unifies them and assigns a
//! category:
//!
//! | Category | Examples | Shown as |
//! |----------|----------|----------|
//! | Validation | empty login fields, empty post | inline message |
//! | Permission | microphone refused | inline message |
//! | Network | API unreachable, non-2xx | "Failed to ..." |
//! | Storage | unreadable data file | message + hint |
//! | Auth | not signed in, onboarding missing | redirect |
//! | Configuration | bad MUSE_* value | message + hint |

mod auth;
mod capture;
mod category;
mod muse_error;
mod network;
mod result;
mod storage;

pub use auth::AuthError;
pub use capture::{CaptureError, MICROPHONE_DENIED_MESSAGE};
pub use category::ErrorCategory;
pub use muse_error::MuseError;
pub use network::{ApiAction, NetworkError};
pub use result::MuseResult;
pub use storage::StorageError;
