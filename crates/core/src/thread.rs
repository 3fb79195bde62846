//! Thread loading and validation.
//!
//! This is the boundary where raw JSON becomes a [`Post`]. A document may be either a post
//! object (`{"id", "title", "selftext", "comments"}`) or a bare array of comments. Both are
//! validated before anything is rendered.

use crate::comment::{Comment, Post};
use crate::{ThreadError, ThreadResult};
use std::collections::HashSet;
use std::path::Path;

/// Parses a thread document and validates it against `max_depth`.
///
/// # Errors
///
/// - `ThreadError::Deserialization` if the JSON is malformed or a node has the wrong shape.
/// - `ThreadError::InvalidInput` if the top-level value is neither an object, an array nor `null`.
/// - `ThreadError::DuplicateId` / `ThreadError::TooDeep` from [`validate_thread`].
pub fn parse_thread(content: &str, max_depth: usize) -> ThreadResult<Post> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(ThreadError::Deserialization)?;

    let post = match value {
        serde_json::Value::Null => Post::default(),
        serde_json::Value::Array(_) => {
            let comments: Vec<Comment> =
                serde_json::from_value(value).map_err(ThreadError::Deserialization)?;
            Post::from_comments(comments)
        }
        serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(ThreadError::Deserialization)?
        }
        _ => {
            return Err(ThreadError::InvalidInput(
                "thread document must be a post object or an array of comments".into(),
            ))
        }
    };

    validate_thread(&post.comments, max_depth)?;
    Ok(post)
}

/// Reads a thread document from disk and parses it with [`parse_thread`].
pub fn load_thread(path: &Path, max_depth: usize) -> ThreadResult<Post> {
    let content = std::fs::read_to_string(path).map_err(ThreadError::FileRead)?;
    let post = parse_thread(&content, max_depth).inspect_err(|e| {
        tracing::warn!("rejected thread file {}: {}", path.display(), e);
    })?;

    tracing::debug!(
        "loaded thread {} with {} top-level comments",
        path.display(),
        post.comments.len()
    );
    Ok(post)
}

/// Checks the structural invariants the renderer relies on.
///
/// Sibling ids must be unique, because they are the identity keys of rendered blocks. Ids
/// may repeat across different parents. A thread whose deepest comment sits at a level
/// greater than `max_depth` (top-level comments are level 1) is rejected.
pub fn validate_thread(comments: &[Comment], max_depth: usize) -> ThreadResult<()> {
    fn check(comments: &[Comment], level: usize, max_depth: usize) -> ThreadResult<()> {
        if comments.is_empty() {
            return Ok(());
        }
        if level > max_depth {
            return Err(ThreadError::TooDeep { max: max_depth });
        }

        let mut seen = HashSet::with_capacity(comments.len());
        for comment in comments {
            if !seen.insert(&comment.id) {
                return Err(ThreadError::DuplicateId {
                    id: comment.id.clone(),
                });
            }
        }

        for comment in comments {
            check(&comment.comments, level + 1, max_depth)?;
        }
        Ok(())
    }

    check(comments, 1, max_depth)
}
