//! Community boards: local storage-backed and server-backed variants.

pub mod remote;
pub mod store;

pub use remote::RemoteCommunity;
pub use store::{share_text, Board, CommunityStore};
