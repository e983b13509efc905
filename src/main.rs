//! Mathdown - renders converted-document markdown with a lightweight
//! math dialect to styled HTML.
//!
//! This binary wires the library crates together: configuration,
//! the rewrite pipeline, HTML rendering, and the terminal typing
//! animation.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use mathdown_config::Config;
use mathdown_core::{Result, TypingOptions};
use mathdown_render::features::copy_to_clipboard;
use mathdown_render::{extract_code_blocks, HtmlRenderer, RenderOptions};
use mathdown_typing::{Phase, TypingSession};
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Instant;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Mathdown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    debug!("Effective config: {:?}", config);

    let content = read_content(cli)?;

    if cli.copy {
        // The clipboard gets the content exactly as written, before
        // any rewriting
        copy_to_clipboard(&content, &mut io::stdout())?;
        info!("Copied {} bytes to clipboard", content.len());
    }

    if cli.animate {
        let mut typing = config.typing.to_options();
        typing.enabled = true;
        return animate(&content, &typing);
    }

    let mut code_opts = config.code_block_options();
    if cli.line_numbers {
        code_opts.show_line_numbers = true;
    }

    let renderer = HtmlRenderer::new(RenderOptions { code: code_opts });
    let html = if cli.standalone {
        renderer.render_standalone(&content, &cli.title)?
    } else {
        renderer.render(&content)
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            io::stdout().write_all(html.as_bytes())?;
        }
    }

    Ok(())
}

/// Load configuration with the optional -c override (a file path or
/// inline TOML).
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_default();

    if let Some(ref config_arg) = cli.config {
        if Path::new(config_arg).exists() {
            match Config::load_from(Path::new(config_arg)) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged config from file: {}", config_arg);
                }
                Err(e) => {
                    error!("Failed to load config file {}: {}", config_arg, e);
                }
            }
        } else {
            match Config::parse(config_arg) {
                Ok(override_config) => {
                    config.merge(&override_config);
                    debug!("Merged inline config");
                }
                Err(e) => {
                    error!("Failed to parse config: {}", e);
                }
            }
        }
    }

    config
}

/// Read all input, concatenating files or draining stdin.
fn read_content(cli: &Cli) -> Result<String> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    let mut content = String::new();
    for path in &cli.files {
        info!("Reading file: {}", path.display());
        if !content.is_empty() {
            content.push_str("\n\n");
        }
        content.push_str(&std::fs::read_to_string(path)?);
    }
    Ok(content)
}

/// Play each fenced code block as a typing animation on the terminal.
///
/// Loop settings are ignored here; a CLI run plays each block once.
fn animate(content: &str, typing: &TypingOptions) -> Result<()> {
    let blocks = extract_code_blocks(content);
    info!("Animating {} code blocks", blocks.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (ix, (language, raw)) in blocks.iter().enumerate() {
        if ix > 0 {
            writeln!(out)?;
        }
        if let Some(lang) = language {
            writeln!(out, "--- {} ---", mathdown_syntax::language_label(lang))?;
        }

        let mut session = TypingSession::new(raw, typing, Instant::now());
        let mut printed = 0;
        while let Some(deadline) = session.next_deadline() {
            if session.phase() == Phase::LoopWait {
                break;
            }
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            session.poll(Instant::now());

            let revealed = session.revealed();
            out.write_all(revealed[printed..].as_bytes())?;
            out.flush()?;
            printed = revealed.len();
        }

        // Typing disabled or interrupted mid-pass: show the rest
        let revealed = session.revealed();
        out.write_all(revealed[printed..].as_bytes())?;
        writeln!(out)?;
        out.flush()?;
    }

    Ok(())
}
