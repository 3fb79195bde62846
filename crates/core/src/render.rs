//! Comment tree rendering.
//!
//! Rendering happens in two steps. [`render_view`] projects a thread into a borrowed [`View`]
//! tree that mirrors the input shape exactly (same branching, same order, one depth step per
//! level). The view is then written out as HTML ([`render_html`], [`render_post_html`]) or as
//! an indented plain-text outline ([`render_text`]).
//!
//! Everything here is a pure function of its input: no mutation, no I/O, and the same
//! thread always yields the same output.

use crate::comment::{Comment, Post};
use crate::constants::{NO_COMMENTS_PLACEHOLDER, TEXT_INDENT, THREAD_STYLESHEET};
use threadview_types::CommentId;

/// Options that affect HTML presentation only. The view tree is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Adds the `connector` class to nested blocks so they draw an elbow line to their parent.
    pub show_connector: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_connector: true,
        }
    }
}

/// Rendered shape of a comment thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// The thread had no comments.
    Placeholder,
    /// One block per top-level comment, in input order.
    Blocks(Vec<Block<'a>>),
}

/// A single rendered comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Identity of the block across re-renders; always the comment's id.
    pub key: &'a CommentId,
    /// 0 for top-level comments, +1 per nesting level.
    pub depth: usize,
    pub body: &'a str,
    /// Rendered replies. Empty for leaves.
    pub children: Vec<Block<'a>>,
}

impl<'a> View<'a> {
    /// Number of blocks at every depth.
    pub fn block_count(&self) -> usize {
        fn count(blocks: &[Block<'_>]) -> usize {
            blocks.iter().map(|b| 1 + count(&b.children)).sum()
        }

        match self {
            View::Placeholder => 0,
            View::Blocks(blocks) => count(blocks),
        }
    }

    /// Block keys in depth-first pre-order, i.e. document order.
    pub fn keys_in_order(&self) -> Vec<&'a CommentId> {
        fn collect<'b>(blocks: &[Block<'b>], out: &mut Vec<&'b CommentId>) {
            for block in blocks {
                out.push(block.key);
                collect(&block.children, out);
            }
        }

        let mut keys = Vec::new();
        if let View::Blocks(blocks) = self {
            collect(blocks, &mut keys);
        }
        keys
    }
}

/// Projects a thread into its view tree.
///
/// `None` and an empty slice both produce [`View::Placeholder`] and nothing else.
pub fn render_view(comments: Option<&[Comment]>) -> View<'_> {
    match comments {
        Some(comments) if !comments.is_empty() => View::Blocks(blocks(comments, 0)),
        _ => View::Placeholder,
    }
}

fn blocks(comments: &[Comment], depth: usize) -> Vec<Block<'_>> {
    comments
        .iter()
        .map(|comment| Block {
            key: &comment.id,
            depth,
            body: &comment.body,
            children: blocks(&comment.comments, depth + 1),
        })
        .collect()
}

/// Renders a thread as nested HTML blocks.
///
/// Bodies and keys are HTML-escaped; comment text is always shown as text, never markup.
pub fn render_html(comments: Option<&[Comment]>, options: &RenderOptions) -> String {
    let view = render_view(comments);
    let mut output = String::from("<div class=\"comment-thread\">");

    match &view {
        View::Placeholder => {
            output.push_str(&format!(
                "<p class=\"comment-placeholder\">{}</p>",
                NO_COMMENTS_PLACEHOLDER
            ));
        }
        View::Blocks(blocks) => {
            for block in blocks {
                write_block_html(&mut output, block, options);
            }
        }
    }

    output.push_str("</div>");
    output
}

fn write_block_html(output: &mut String, block: &Block<'_>, options: &RenderOptions) {
    let mut class = String::from("comment");
    if block.depth > 0 {
        class.push_str(" nested");
        if options.show_connector {
            class.push_str(" connector");
        }
    }

    output.push_str(&format!(
        "<div class=\"{}\" data-key=\"{}\" data-depth=\"{}\">",
        class,
        escape_html(block.key.as_str()),
        block.depth
    ));
    output.push_str(&format!(
        "<div class=\"comment-body\">{}</div>",
        escape_html(block.body)
    ));
    for child in &block.children {
        write_block_html(output, child, options);
    }
    output.push_str("</div>");
}

/// Renders a post heading, its self text and its comment thread.
///
/// The page carries [`THREAD_STYLESHEET`], which turns the `nested` and `connector` classes into
/// one indentation step per depth level.
pub fn render_post_html(post: &Post, options: &RenderOptions) -> String {
    let mut output = String::from("<article class=\"post\"");
    if let Some(id) = &post.id {
        output.push_str(&format!(" data-post-id=\"{}\"", escape_html(id)));
    }
    output.push('>');
    output.push_str(&format!("<style>{}</style>", THREAD_STYLESHEET));

    if !post.title.trim().is_empty() {
        output.push_str(&format!(
            "<h1 class=\"post-title\">{}</h1>",
            escape_html(&post.title)
        ));
    }
    if !post.selftext.trim().is_empty() {
        output.push_str(&format!(
            "<p class=\"post-selftext\">{}</p>",
            escape_html(&post.selftext)
        ));
    }

    output.push_str(&render_html(Some(post.comments.as_slice()), options));
    output.push_str("</article>");
    output
}

/// Renders a thread as an indented outline, one `- ` item per comment.
///
/// Continuation lines of multi-line bodies are aligned under the first line.
pub fn render_text(comments: Option<&[Comment]>) -> String {
    match render_view(comments) {
        View::Placeholder => format!("{}\n", NO_COMMENTS_PLACEHOLDER),
        View::Blocks(blocks) => {
            let mut output = String::new();
            for block in &blocks {
                write_block_text(&mut output, block);
            }
            output
        }
    }
}

fn write_block_text(output: &mut String, block: &Block<'_>) {
    let indent = TEXT_INDENT.repeat(block.depth);
    let mut lines = block.body.lines();

    output.push_str(&format!("{}- {}\n", indent, lines.next().unwrap_or("")));
    for line in lines {
        output.push_str(&format!("{}  {}\n", indent, line));
    }

    for child in &block.children {
        write_block_text(output, child);
    }
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
