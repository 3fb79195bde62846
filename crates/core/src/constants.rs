//! Constants used throughout the threadview core crate.

/// Text shown in place of a comment thread that has no comments.
pub const NO_COMMENTS_PLACEHOLDER: &str = "No comments available.";

/// Default thread file served by the index page when `THREAD_DATA_PATH` is unset.
pub const DEFAULT_THREAD_DATA_PATH: &str = "thread_data/thread.json";

/// Default REST bind address when `THREADVIEW_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Maximum nesting depth accepted by the thread loader unless overridden.
pub const MAX_THREAD_DEPTH: usize = 48;

/// Indentation used per depth level in the plain-text outline.
pub const TEXT_INDENT: &str = "  ";

/// Stylesheet embedded in post pages. Every block gets a left rule and padding; nested blocks
/// shift right by one step and connectors draw an elbow back to the parent's rule.
pub const THREAD_STYLESHEET: &str = concat!(
    ".comment{position:relative;border-left:1px solid #d1d5db;padding-left:1rem;margin:0.5rem 0}",
    ".comment.nested{margin-left:1rem}",
    ".comment.connector::before{content:'';position:absolute;top:0.75rem;left:-1rem;width:1rem;border-top:1px solid #d1d5db}",
    ".comment-body{padding:0.5rem 0;overflow-wrap:break-word}",
    ".comment-placeholder{color:#6b7280}",
);
