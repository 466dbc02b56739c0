//! CLI for rendering and saving recorded HTTP exchanges.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use hxr_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_digest, run_render, run_save, SaveOptions};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hxr")]
#[command(
    about = "hxr: render and save HTTP exchanges as content-addressed files",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the transcript of every exchange in a HAR file.
    Render {
        /// Path to the HAR file.
        har: PathBuf,
        /// Print response bodies only (no URL, request or status lines, headers).
        #[arg(long)]
        body_only: bool,
    },

    /// Save every successful exchange under <out>/<host>/<sha1>.{headers,body}.
    Save {
        /// Path to the HAR file.
        har: PathBuf,
        /// Output root (defaults to `output_dir` from config).
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Do not write `.headers` files; the digest then covers the body only.
        #[arg(long)]
        no_headers: bool,
        /// Do not append to the index file.
        #[arg(long)]
        no_index: bool,
    },

    /// Print the digest each exchange would be saved under, without writing.
    Digest {
        /// Path to the HAR file.
        har: PathBuf,
        /// Compute the digest over the body only.
        #[arg(long)]
        no_headers: bool,
    },

    /// Generate a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Render { har, body_only } => run_render(&har, body_only)?,
            CliCommand::Save {
                har,
                out,
                no_headers,
                no_index,
            } => {
                let out = out.unwrap_or_else(|| cfg.output_dir.clone());
                let opts = SaveOptions {
                    index_path: if no_index { None } else { cfg.index_path(&out) },
                    skip_headers: no_headers || !cfg.save_headers,
                    out,
                };
                run_save(&har, &opts)?;
            }
            CliCommand::Digest { har, no_headers } => {
                run_digest(&har, no_headers || !cfg.save_headers)?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
