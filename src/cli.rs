// SPDX-FileCopyrightText: 2026 RolaPet Team <oss@rolapet.dev>
//
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rolapet")]
#[command(version)]
#[command(
    about = "Registration and catalog console for electric-mobility communities",
    long_about = None
)]
pub struct Cli {
    /// Length of generated entity ids
    #[arg(long, env = "ROLAPET_ID_LEN")]
    pub id_len: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Seed sample data, run a tour of the registry, and print the report
    Demo {
        /// Emit the directory stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
