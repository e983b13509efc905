//! Command-line interface for mathdown.

use clap::Parser;
use std::path::PathBuf;

/// Mathdown - renders converted-document markdown with a lightweight
/// math dialect to styled HTML.
#[derive(Parser, Debug)]
#[command(
    name = "mdv",
    author = "Mathdown Contributors",
    version,
    about = "Render math-annotated markdown to styled HTML",
    after_help = "Repository: https://github.com/mathdown/mathdown-rs\n\n\
                  Examples:\n  \
                  cat notes.md | mdv\n  \
                  mdv --standalone -o notes.html notes.md\n  \
                  mdv -c 'typing = { Enabled = true, Mode = \"line\" }' --animate notes.md\n  \
                  mdv --copy notes.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit a complete HTML document with embedded styles
    #[arg(long = "standalone")]
    pub standalone: bool,

    /// Document title for --standalone output
    #[arg(long = "title", default_value = "mathdown")]
    pub title: String,

    /// Play code blocks as a typing animation on the terminal
    #[arg(long = "animate")]
    pub animate: bool,

    /// Copy the original unprocessed content to the clipboard (OSC 52)
    #[arg(long = "copy")]
    pub copy: bool,

    /// Show line numbers in code blocks
    #[arg(long = "line-numbers")]
    pub line_numbers: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use mathdown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
