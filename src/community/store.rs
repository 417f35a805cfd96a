//! Locally persisted community boards.

use std::fmt;
use std::str::FromStr;

use crate::error::MuseResult;
use crate::models::community::{Comment, Post, Reply, ANONYMOUS_AUTHOR, NAMED_AUTHOR};
use crate::storage::keys;
use crate::traits::KeyValueStore;

/// The two local boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Board {
    #[default]
    Community,
    AcceptanceTherapy,
}

impl Board {
    pub fn storage_key(&self) -> &'static str {
        match self {
            Board::Community => keys::COMMUNITY_POSTS,
            Board::AcceptanceTherapy => keys::ACCEPTANCE_THERAPY_POSTS,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Board::Community => f.write_str("community"),
            Board::AcceptanceTherapy => f.write_str("acceptance-therapy"),
        }
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "community" => Ok(Board::Community),
            "acceptance-therapy" | "acceptance" | "therapy" => Ok(Board::AcceptanceTherapy),
            other => Err(format!("Unknown board: {}", other)),
        }
    }
}

/// Text offered when sharing a post outside the app.
pub fn share_text(post: &Post) -> String {
    format!("{} shared:\n{}", post.author, post.message)
}

/// One board's posts, newest first, persisted after every change.
///
/// Blank text and unknown ids are silent no-ops (`Ok(None)`).
pub struct CommunityStore<S: KeyValueStore> {
    store: S,
    board: Board,
    posts: Vec<Post>,
    anonymous: bool,
}

impl<S: KeyValueStore> CommunityStore<S> {
    pub fn load(store: S, board: Board) -> MuseResult<Self> {
        let posts = store.get_json(board.storage_key())?.unwrap_or_default();
        Ok(Self {
            store,
            board,
            posts,
            anonymous: true,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Post as "Anonymous User" (default) or as "User".
    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.anonymous = anonymous;
    }

    pub fn author(&self) -> &'static str {
        if self.anonymous {
            ANONYMOUS_AUTHOR
        } else {
            NAMED_AUTHOR
        }
    }

    pub fn create_post(&mut self, message: &str, mood: Option<&str>) -> MuseResult<Option<Post>> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(None);
        }
        let mood = mood.map(str::trim).filter(|m| !m.is_empty()).map(String::from);
        let post = Post::new(self.author(), message, mood);

        let mut next = Vec::with_capacity(self.posts.len() + 1);
        next.push(post.clone());
        next.extend(self.posts.iter().cloned());
        self.commit(next)?;

        tracing::debug!(board = %self.board, post_id = %post.id, "post created");
        Ok(Some(post))
    }

    pub fn toggle_like(&mut self, post_id: &str) -> MuseResult<Option<Post>> {
        self.update_post(post_id, |post| {
            post.toggle_like();
            Some(post.clone())
        })
    }

    pub fn add_comment(&mut self, post_id: &str, text: &str) -> MuseResult<Option<Comment>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let comment = Comment::new(self.author(), text);
        self.update_post(post_id, |post| {
            post.comments.push(comment.clone());
            Some(comment)
        })
    }

    pub fn add_reply(
        &mut self,
        post_id: &str,
        comment_id: &str,
        text: &str,
    ) -> MuseResult<Option<Reply>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let reply = Reply::new(self.author(), text);
        self.update_post(post_id, |post| {
            let comment = post.comments.iter_mut().find(|c| c.id == comment_id)?;
            comment.replies.push(reply.clone());
            Some(reply)
        })
    }

    /// Apply `change` to a copy of one post and persist the result if the
    /// change produced a value.
    fn update_post<T>(
        &mut self,
        post_id: &str,
        change: impl FnOnce(&mut Post) -> Option<T>,
    ) -> MuseResult<Option<T>> {
        let Some(index) = self.posts.iter().position(|p| p.id == post_id) else {
            return Ok(None);
        };
        let mut next = self.posts.clone();
        let Some(result) = change(&mut next[index]) else {
            return Ok(None);
        };
        self.commit(next)?;
        Ok(Some(result))
    }

    fn commit(&mut self, next: Vec<Post>) -> MuseResult<()> {
        self.store.set_json(self.board.storage_key(), &next)?;
        self.posts = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;

    fn board() -> (InMemoryStore, CommunityStore<InMemoryStore>) {
        let backing = InMemoryStore::new();
        let store = CommunityStore::load(backing.clone(), Board::Community).unwrap();
        (backing, store)
    }

    #[test]
    fn test_blank_post_is_noop() {
        let (backing, mut store) = board();
        assert_eq!(store.create_post("  ", None).unwrap(), None);
        assert!(store.posts().is_empty());
        assert!(backing.keys().is_empty());
    }

    #[test]
    fn test_newest_post_first() {
        let (_, mut store) = board();
        store.create_post("first", None).unwrap();
        store.create_post("second", Some("😊 Happy")).unwrap();
        assert_eq!(store.posts()[0].message, "second");
        assert_eq!(store.posts()[0].mood.as_deref(), Some("😊 Happy"));
        assert_eq!(store.posts()[1].message, "first");
    }

    #[test]
    fn test_toggle_like_twice_restores() {
        let (_, mut store) = board();
        let post = store.create_post("hello", None).unwrap().unwrap();
        let liked = store.toggle_like(&post.id).unwrap().unwrap();
        assert_eq!((liked.likes, liked.liked), (1, true));
        store.toggle_like(&post.id).unwrap();
        let restored = store.post(&post.id).unwrap();
        assert_eq!((restored.likes, restored.liked), (0, false));
        assert_eq!(store.toggle_like("missing").unwrap(), None);
    }

    #[test]
    fn test_comments_and_replies_append() {
        let (_, mut store) = board();
        let post = store.create_post("hello", None).unwrap().unwrap();
        let c1 = store.add_comment(&post.id, "one").unwrap().unwrap();
        store.add_comment(&post.id, "two").unwrap();
        store.add_reply(&post.id, &c1.id, "r1").unwrap();
        store.add_reply(&post.id, &c1.id, "r2").unwrap();

        let stored = store.post(&post.id).unwrap();
        let texts: Vec<_> = stored.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
        let replies: Vec<_> = stored.comments[0].replies.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(replies, vec!["r1", "r2"]);
    }

    #[test]
    fn test_unknown_targets_are_noops() {
        let (_, mut store) = board();
        let post = store.create_post("hello", None).unwrap().unwrap();
        assert_eq!(store.add_comment("missing", "x").unwrap(), None);
        assert_eq!(store.add_comment(&post.id, "").unwrap(), None);
        assert_eq!(store.add_reply(&post.id, "missing", "x").unwrap(), None);
        assert!(store.post(&post.id).unwrap().comments.is_empty());
    }

    #[test]
    fn test_author_toggle_and_share() {
        let backing = InMemoryStore::new();
        let mut store = CommunityStore::load(backing, Board::AcceptanceTherapy).unwrap();
        let anon = store.create_post("I am learning", None).unwrap().unwrap();
        assert_eq!(anon.author, "Anonymous User");

        store.set_anonymous(false);
        let named = store.create_post("Me too", None).unwrap().unwrap();
        assert_eq!(named.author, "User");
        assert_eq!(share_text(&named), "User shared:\nMe too");
    }

    #[test]
    fn test_boards_are_separate() {
        let backing = InMemoryStore::new();
        let mut community = CommunityStore::load(backing.clone(), Board::Community).unwrap();
        community.create_post("public", None).unwrap();

        let therapy = CommunityStore::load(backing.clone(), Board::AcceptanceTherapy).unwrap();
        assert!(therapy.posts().is_empty());
        let reloaded = CommunityStore::load(backing, Board::Community).unwrap();
        assert_eq!(reloaded.posts().len(), 1);
    }

    #[test]
    fn test_board_parsing() {
        assert_eq!("community".parse::<Board>(), Ok(Board::Community));
        assert_eq!(
            "acceptance-therapy".parse::<Board>(),
            Ok(Board::AcceptanceTherapy)
        );
        assert!("random".parse::<Board>().is_err());
    }
}
