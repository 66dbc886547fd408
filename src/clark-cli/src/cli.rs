//! Command-line argument parsing and dispatch.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use uuid::Uuid;

use clark_core::render::{MarkupTheme, render_message};
use clark_protocol::Message;

use crate::ansi;

#[derive(Debug, Parser)]
#[command(
    name = "clark",
    about = "Render Clark chat transcripts to the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a transcript file or a literal message
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON transcript file (an array of messages)
    pub transcript: Option<PathBuf>,

    /// Render this literal content as a single assistant message
    #[arg(long, conflicts_with = "transcript")]
    pub text: Option<String>,

    /// Render width in columns
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

/// Runs the parsed command.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => render_cmd(&args),
    }
}

fn render_cmd(args: &RenderArgs) -> Result<()> {
    let messages: Vec<Message> = if let Some(text) = &args.text {
        vec![Message::assistant(Uuid::new_v4(), text.clone())]
    } else if let Some(path) = &args.transcript {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("invalid transcript JSON in {}", path.display()))?
    } else {
        bail!("provide a transcript file or --text");
    };

    debug!(messages = messages.len(), width = args.width, "rendering transcript");

    let theme = MarkupTheme::default();
    let mut stdout = io::stdout().lock();
    for (i, message) in messages.iter().enumerate() {
        if i > 0 {
            writeln!(stdout)?;
        }
        let lines = render_message(message, &theme, args.width);
        ansi::write_lines(&mut stdout, &lines, !args.no_color)?;
    }
    Ok(())
}
