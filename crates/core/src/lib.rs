//! # threadview core
//!
//! Core logic for rendering nested comment threads.
//!
//! This crate contains pure data operations:
//! - The comment/post data model and tree statistics
//! - The comment tree renderer (view tree, HTML, plain-text outline)
//! - The static route table
//! - Thread loading and validation from JSON documents
//!
//! **No API concerns**: HTTP servers and CLIs belong in `api-rest` and `threadview-cli`.

pub mod comment;
pub mod config;
pub mod constants;
pub mod error;
pub mod render;
pub mod routes;
pub mod thread;

pub use comment::{thread_stats, Comment, Post, ThreadStats};
pub use config::CoreConfig;
pub use constants::*;
pub use error::{ThreadError, ThreadResult};
pub use render::{render_html, render_post_html, render_text, render_view, RenderOptions, View};
pub use routes::{index_route, routes, Page, RouteEntry, RoutePath, ROUTES};
pub use threadview_types::{CommentId, TextError};

use std::sync::Arc;

/// A rendered page together with the number of comment blocks it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub blocks: usize,
}

/// Thread operations bound to a startup configuration.
#[derive(Clone, Debug)]
pub struct ThreadService {
    cfg: Arc<CoreConfig>,
}

impl ThreadService {
    /// Creates a new `ThreadService` using the provided configuration.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Loads the configured thread file and renders it as a post page.
    ///
    /// The file is read on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns any error from [`thread::load_thread`].
    pub fn render_thread_page(&self) -> ThreadResult<RenderedPage> {
        let post = thread::load_thread(self.cfg.thread_data_path(), self.cfg.max_depth())?;
        Ok(self.render_post(&post))
    }

    /// Renders an already parsed post with the configured options.
    pub fn render_post(&self, post: &Post) -> RenderedPage {
        let blocks = render_view(Some(post.comments.as_slice())).block_count();
        RenderedPage {
            html: render_post_html(post, self.cfg.render_options()),
            blocks,
        }
    }

    /// Validates a bare comment list and renders it as a thread fragment.
    ///
    /// `None` renders the placeholder.
    ///
    /// # Errors
    ///
    /// Returns `ThreadError::DuplicateId` or `ThreadError::TooDeep` if the comments break the
    /// thread invariants.
    pub fn render_comments(&self, comments: Option<&[Comment]>) -> ThreadResult<RenderedPage> {
        if let Some(comments) = comments {
            thread::validate_thread(comments, self.cfg.max_depth())?;
        }

        Ok(RenderedPage {
            html: render_html(comments, self.cfg.render_options()),
            blocks: render_view(comments).block_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn service_for(path: std::path::PathBuf) -> ThreadService {
        let cfg = CoreConfig::new(path, RenderOptions::default(), MAX_THREAD_DEPTH).unwrap();
        ThreadService::new(Arc::new(cfg))
    }

    #[test]
    fn renders_configured_thread_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id": "p1", "title": "Hello", "comments": [
                {{"id": "1", "body": "hello", "comments": [{{"id": "2", "body": "reply"}}]}}
            ]}}"#
        )
        .unwrap();

        let page = service_for(file.path().to_path_buf())
            .render_thread_page()
            .unwrap();
        assert_eq!(page.blocks, 2);
        assert!(page.html.contains("<h1 class=\"post-title\">Hello</h1>"));
        assert!(page.html.contains("data-key=\"2\" data-depth=\"1\""));
    }

    #[test]
    fn render_comments_validates_and_counts() {
        let service = service_for("unused.json".into());

        let none = service.render_comments(None).unwrap();
        assert_eq!(none.blocks, 0);
        assert!(none.html.contains(NO_COMMENTS_PLACEHOLDER));

        let dup = vec![Comment::new("1", "a").unwrap(), Comment::new("1", "b").unwrap()];
        assert!(matches!(
            service.render_comments(Some(dup.as_slice())),
            Err(ThreadError::DuplicateId { .. })
        ));
    }
}
