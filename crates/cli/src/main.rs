use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use threadview_core::{
    render_post_html, render_text, routes, thread::load_thread, thread_stats, RenderOptions,
    ThreadResult, MAX_THREAD_DEPTH,
};

#[derive(Parser)]
#[command(name = "threadview")]
#[command(about = "Render nested comment threads")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a thread file (post object or comment array)
    Render {
        /// Path to the thread JSON file
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Omit the elbow connector class on nested comments
        #[arg(long)]
        no_connector: bool,
        /// Maximum accepted nesting depth
        #[arg(long, default_value_t = MAX_THREAD_DEPTH)]
        max_depth: usize,
    },
    /// List the route table
    Routes,
    /// Print the shape of a thread file
    Stats {
        /// Path to the thread JSON file
        file: PathBuf,
        /// Maximum accepted nesting depth
        #[arg(long, default_value_t = MAX_THREAD_DEPTH)]
        max_depth: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            file,
            format,
            no_connector,
            max_depth,
        }) => {
            print!("{}", render_command(&file, format, no_connector, max_depth)?);
        }
        Some(Commands::Routes) => {
            print!("{}", routes_command());
        }
        Some(Commands::Stats { file, max_depth }) => {
            print!("{}", stats_command(&file, max_depth)?);
        }
        None => {
            println!("Use 'threadview --help' for commands");
        }
    }

    Ok(())
}

/// Loads a thread file and renders it in the requested format.
fn render_command(
    file: &Path,
    format: Format,
    no_connector: bool,
    max_depth: usize,
) -> ThreadResult<String> {
    let post = load_thread(file, max_depth)?;
    let output = match format {
        Format::Html => {
            let options = RenderOptions {
                show_connector: !no_connector,
            };
            format!("{}\n", render_post_html(&post, &options))
        }
        Format::Text => {
            let mut out = String::new();
            if !post.title.trim().is_empty() {
                out.push_str(&format!("{}\n\n", post.title));
            }
            out.push_str(&render_text(Some(post.comments.as_slice())));
            out
        }
    };
    Ok(output)
}

/// One line per active route table entry.
fn routes_command() -> String {
    let mut out = String::new();
    for entry in routes() {
        out.push_str(&format!(
            "{:<12} {:<16} index={}\n",
            entry.path.url(),
            entry.element.as_str(),
            entry.index
        ));
    }
    out
}

fn stats_command(file: &Path, max_depth: usize) -> ThreadResult<String> {
    let post = load_thread(file, max_depth)?;
    let stats = thread_stats(&post.comments);
    Ok(format!(
        "Comments: {}, Max depth: {}, Leaves: {}\n",
        stats.total, stats.max_depth, stats.leaves
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use threadview_core::{ThreadError, NO_COMMENTS_PLACEHOLDER};

    fn thread_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = r#"{"title": "Weekly thread", "comments": [
        {"id": "1", "body": "hello", "comments": [{"id": "2", "body": "reply"}]},
        {"id": "3", "body": "second"}
    ]}"#;

    #[test]
    fn render_defaults_to_html_with_connectors() {
        let cli = Cli::try_parse_from(["threadview", "render", "thread.json"]).unwrap();
        match cli.command {
            Some(Commands::Render {
                file,
                format,
                no_connector,
                max_depth,
            }) => {
                assert_eq!(file, PathBuf::from("thread.json"));
                assert_eq!(format, Format::Html);
                assert!(!no_connector);
                assert_eq!(max_depth, MAX_THREAD_DEPTH);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn render_accepts_text_format() {
        let cli = Cli::try_parse_from([
            "threadview",
            "render",
            "t.json",
            "--format",
            "text",
            "--no-connector",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Render {
                format: Format::Text,
                no_connector: true,
                ..
            })
        ));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["threadview", "render", "t.json", "--format", "pdf"]).is_err());
    }

    #[test]
    fn stats_accepts_max_depth() {
        let cli = Cli::try_parse_from(["threadview", "stats", "t.json", "--max-depth", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Stats { max_depth: 4, .. })
        ));

        let cli = Cli::try_parse_from(["threadview", "stats", "t.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Stats { max_depth: MAX_THREAD_DEPTH, .. })
        ));
    }

    #[test]
    fn render_command_writes_post_html() {
        let file = thread_file(SAMPLE);

        let html = render_command(file.path(), Format::Html, false, MAX_THREAD_DEPTH).unwrap();
        assert!(html.contains("<h1 class=\"post-title\">Weekly thread</h1>"));
        assert!(html.contains("data-key=\"2\" data-depth=\"1\""));
        assert!(html.contains("class=\"comment nested connector\" data-key=\"2\""));

        let plain = render_command(file.path(), Format::Html, true, MAX_THREAD_DEPTH).unwrap();
        assert!(plain.contains("class=\"comment nested\" data-key=\"2\""));
    }

    #[test]
    fn render_command_writes_text_outline() {
        let file = thread_file(SAMPLE);

        let text = render_command(file.path(), Format::Text, false, MAX_THREAD_DEPTH).unwrap();
        assert_eq!(text, "Weekly thread\n\n- hello\n  - reply\n- second\n");

        let empty = thread_file("[]");
        let text = render_command(empty.path(), Format::Text, false, MAX_THREAD_DEPTH).unwrap();
        assert!(text.contains(NO_COMMENTS_PLACEHOLDER));
    }

    #[test]
    fn render_command_enforces_max_depth() {
        let file = thread_file(SAMPLE);
        let err = render_command(file.path(), Format::Html, false, 1).unwrap_err();
        assert!(matches!(err, ThreadError::TooDeep { max: 1 }));
    }

    #[test]
    fn routes_command_lists_index_entry() {
        let out = routes_command();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("/home"));
        assert!(out.contains("comment-thread"));
        assert!(out.trim_end().ends_with("index=true"));
    }

    #[test]
    fn stats_command_reports_shape() {
        let file = thread_file(SAMPLE);
        assert_eq!(
            stats_command(file.path(), MAX_THREAD_DEPTH).unwrap(),
            "Comments: 3, Max depth: 2, Leaves: 2\n"
        );
        assert!(matches!(
            stats_command(file.path(), 1),
            Err(ThreadError::TooDeep { max: 1 })
        ));
    }
}
