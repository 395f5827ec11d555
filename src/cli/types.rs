//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Compass - Adaptive Intake Diagnostic Engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Compass configuration
    Init {
        /// Force reinitialization even if a config already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Run the interactive intake session
    Run,

    /// Show the current session snapshot
    Status,

    /// Submit one answer for the current question
    Answer {
        /// Answer option value (e.g. "brand", "tier2")
        value: String,
    },

    /// Rewind the session one question
    Back,

    /// Show the classification report for the session
    Report,

    /// Build the CRM handoff payload and close out the session
    Export {
        /// Contact name
        #[arg(long, default_value = "")]
        name: String,

        /// Contact email
        #[arg(long, default_value = "")]
        email: String,

        /// Contact company
        #[arg(long, default_value = "")]
        company: String,
    },

    /// Discard the session and start over
    Reset,
}
