//! Orderly CLI - check and lay out YAML layout documents.

use clap::{Parser, Subcommand, ValueEnum};
use orderly_core::{Size, Visibility};
use orderly_layout::{FrameRecord, ViewRoot};
use orderly_yaml::{inflate, parse_document, InflateError, NodeSpec};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "orderly")]
#[command(about = "Measure and lay out ordered stacking containers")]
#[command(version)]
struct Cli {
    /// Log every measure and layout pass
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a layout document parses and inflates
    Check {
        /// Path to the layout document
        file: PathBuf,
    },

    /// Run a traversal and print every view's frame
    Layout {
        /// Path to the layout document
        file: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value = "1080")]
        width: i32,

        /// Viewport height in pixels
        #[arg(long, default_value = "1920")]
        height: i32,

        /// Make a view visible after the first pass and print a second pass
        #[arg(long = "unhide", value_name = "ID")]
        unhide: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Document {
        path: PathBuf,
        source: InflateError,
    },
    #[error("no view with id '{0}'")]
    UnknownView(String),
    #[error("viewport must not be negative, got {0}x{1}")]
    InvalidViewport(i32, i32),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Frames captured after one traversal.
#[derive(Debug, Serialize)]
struct Pass {
    traversal: u64,
    frames: Vec<FrameRecord>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();

    let result = match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Layout {
            file,
            width,
            height,
            unhide,
            format,
        } => layout(&file, Size::new(width, height), &unhide, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn check(path: &Path) -> Result<(), CliError> {
    let content = read(path)?;
    let document_error = |source| CliError::Document {
        path: path.to_path_buf(),
        source,
    };
    let document = parse_document(&content).map_err(document_error)?;
    inflate(&document).map_err(document_error)?;

    println!("Document valid!");
    println!("  Root: {:?}", document.root.kind);
    println!("  Views: {}", count_nodes(&document.root));
    println!("  Density: {}", document.density);
    Ok(())
}

fn count_nodes(node: &NodeSpec) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

fn layout(path: &Path, viewport: Size, unhide: &[String], format: Format) -> Result<(), CliError> {
    let passes = run_passes(path, &read(path)?, viewport, unhide)?;

    match format {
        Format::Text => {
            for (i, pass) in passes.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("pass {}:", pass.traversal);
                print!("{}", render_frames(&pass.frames));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&passes)?),
    }
    Ok(())
}

/// Inflate `content`, run one traversal, then a second one after
/// `unhide` ids are made visible.
fn run_passes(
    path: &Path,
    content: &str,
    viewport: Size,
    unhide: &[String],
) -> Result<Vec<Pass>, CliError> {
    if viewport.width < 0 || viewport.height < 0 {
        return Err(CliError::InvalidViewport(viewport.width, viewport.height));
    }
    let document_error = |source| CliError::Document {
        path: path.to_path_buf(),
        source,
    };
    let document = parse_document(content).map_err(document_error)?;
    let view = inflate(&document).map_err(document_error)?;

    let mut root = ViewRoot::new(view, viewport);
    root.perform_traversal();
    let mut passes = vec![Pass {
        traversal: root.traversals(),
        frames: root.frames(),
    }];

    if !unhide.is_empty() {
        for id in unhide {
            let view = root
                .find_view_mut(id)
                .ok_or_else(|| CliError::UnknownView(id.clone()))?;
            log::debug!("unhiding {id}");
            view.set_visibility(Visibility::Visible);
        }
        root.perform_traversal();
        passes.push(Pass {
            traversal: root.traversals(),
            frames: root.frames(),
        });
    }
    Ok(passes)
}

fn render_frames(frames: &[FrameRecord]) -> String {
    let mut out = String::new();
    for record in frames {
        let indent = "  ".repeat(record.depth);
        let id = record.id.as_deref().unwrap_or("-");
        let f = record.frame;
        let _ = write!(
            out,
            "{indent}{id} [{}, {}, {}, {}] {}x{}",
            f.left,
            f.top,
            f.right,
            f.bottom,
            f.width(),
            f.height()
        );
        match record.visibility {
            Visibility::Visible => {}
            Visibility::Invisible => out.push_str(" (invisible)"),
            Visibility::Gone => out.push_str(" (gone)"),
        }
        out.push('\n');
    }
    out
}
