//! Comment thread data model.
//!
//! A thread is an ordered forest of [`Comment`] nodes. Child lists follow the empty-sequence
//! convention: an absent, `null` or empty `comments` field all mean "leaf", so the renderer
//! only ever has to check the length of a slice.

use serde::{Deserialize, Deserializer, Serialize};
use threadview_types::{CommentId, TextError};

/// A single comment and its replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Identity key of the comment, unique among its siblings.
    pub id: CommentId,
    /// Display text. Missing or `null` bodies are treated as empty text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    /// Replies in display order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub comments: Vec<Comment>,
}

impl Comment {
    /// Creates a leaf comment.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if `id` has no non-whitespace content.
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Result<Self, TextError> {
        Ok(Self {
            id: CommentId::new(id)?,
            body: body.into(),
            comments: Vec::new(),
        })
    }

    /// Creates a comment with the given replies.
    pub fn with_replies(
        id: impl Into<String>,
        body: impl Into<String>,
        replies: Vec<Comment>,
    ) -> Result<Self, TextError> {
        let mut comment = Self::new(id, body)?;
        comment.comments = replies;
        Ok(comment)
    }

    pub fn is_leaf(&self) -> bool {
        self.comments.is_empty()
    }
}

/// A post and the comment thread underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selftext: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Wraps a bare list of comments in an untitled post.
    pub fn from_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            ..Self::default()
        }
    }
}

/// Shape summary of a comment thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ThreadStats {
    /// Number of comments at every depth.
    pub total: usize,
    /// Number of levels; 0 for an empty thread, 1 when there are only top-level comments.
    pub max_depth: usize,
    /// Number of comments without replies.
    pub leaves: usize,
}

/// Computes [`ThreadStats`] for a list of top-level comments.
pub fn thread_stats(comments: &[Comment]) -> ThreadStats {
    fn walk(comments: &[Comment], depth: usize, stats: &mut ThreadStats) {
        for comment in comments {
            stats.total += 1;
            stats.max_depth = stats.max_depth.max(depth + 1);
            if comment.is_leaf() {
                stats.leaves += 1;
            } else {
                walk(&comment.comments, depth + 1, stats);
            }
        }
    }

    let mut stats = ThreadStats::default();
    walk(comments, 0, &mut stats);
    stats
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_default_to_empty() {
        let json = r#"[
            {"id": "a"},
            {"id": "b", "body": null, "comments": null},
            {"id": "c", "body": "hi", "comments": []}
        ]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();

        assert_eq!(comments.len(), 3);
        assert!(comments.iter().all(Comment::is_leaf));
        assert_eq!(comments[0].body, "");
        assert_eq!(comments[1].body, "");
        assert_eq!(comments[2].body, "hi");
    }

    #[test]
    fn non_array_children_are_rejected() {
        let json = r#"[{"id": "a", "body": "x", "comments": "nope"}]"#;
        assert!(serde_json::from_str::<Vec<Comment>>(json).is_err());
    }

    #[test]
    fn missing_id_is_rejected() {
        let json = r#"[{"body": "orphan"}]"#;
        assert!(serde_json::from_str::<Vec<Comment>>(json).is_err());
    }

    #[test]
    fn leaf_children_are_not_serialized() {
        let comment = Comment::new("1", "hello").unwrap();
        let json = serde_json::to_string(&comment).unwrap();
        assert_eq!(json, r#"{"id":"1","body":"hello"}"#);
    }

    #[test]
    fn stats_cover_every_level() {
        let thread = vec![
            Comment::with_replies(
                "1",
                "root",
                vec![
                    Comment::with_replies("2", "reply", vec![Comment::new("3", "deep").unwrap()])
                        .unwrap(),
                    Comment::new("4", "sibling").unwrap(),
                ],
            )
            .unwrap(),
            Comment::new("5", "second root").unwrap(),
        ];

        let stats = thread_stats(&thread);
        assert_eq!(
            stats,
            ThreadStats {
                total: 5,
                max_depth: 3,
                leaves: 3,
            }
        );
    }

    #[test]
    fn stats_of_empty_thread_are_zero() {
        assert_eq!(thread_stats(&[]), ThreadStats::default());
    }

    #[test]
    fn post_accepts_reddit_shape() {
        let json = r#"{
            "id": "p1",
            "title": "Ask anything",
            "selftext": "",
            "comments": [{"id": "c1", "body": "first"}]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id.as_deref(), Some("p1"));
        assert_eq!(post.title, "Ask anything");
        assert_eq!(post.comments.len(), 1);
    }
}
