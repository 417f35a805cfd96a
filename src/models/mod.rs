//! Data models shared by the client stores and the API server.

pub mod community;
pub mod journal;
pub mod wire;

pub use community::{Comment, Post, Reply, ANONYMOUS_AUTHOR, NAMED_AUTHOR};
pub use journal::{JournalAnalysis, MoodEntry, MoodEntryKind, Suggestion, SuggestionKind, VentRecording};
pub use wire::{
    time_ago, ApiComment, ApiPost, ApiReply, AuthPayload, CreatePostRequest, CredentialsRequest,
    Envelope, LikeRequest, TextRequest, UserDescriptor, Welcome,
};
