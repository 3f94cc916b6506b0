// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # discodec CLI
//!
//! Command-line tool for looking inside DIS captures.
//!
//! ## Usage
//!
//! ```sh
//! # Decode every PDU in a capture
//! discodec inspect capture.dis
//!
//! # Same, as JSON, using a little-endian capture
//! discodec inspect --json --little-endian capture.dis
//!
//! # Show the frame layout with a hex dump of each PDU
//! discodec frames --hex capture.dis
//!
//! # List the PDU types a protocol version supports
//! discodec types --protocol 7
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{FramesCmd, InspectCmd, TypesCmd};
use common::Result;

/// discodec - DIS PDU toolkit
///
/// Decode and inspect IEEE 1278.1 PDU captures.
#[derive(Parser, Clone)]
#[command(name = "discodec")]
#[command(about = "DIS PDU toolkit for inspecting IEEE 1278.1 captures", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Log codec activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode and print every PDU in a capture
    Inspect(InspectCmd),

    /// Show how a capture splits into PDUs
    Frames(FramesCmd),

    /// List the PDU types known to a protocol version
    Types(TypesCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Frames(cmd) => cmd.run(),
        Commands::Types(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
