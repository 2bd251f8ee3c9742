//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Note Uploader - Send a markdown note, its tags and a group to an endpoint.
#[derive(Parser, Debug)]
#[command(name = "note-uploader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the settings file.
    #[arg(long, env = "NOTE_UPLOADER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a note to the configured url.
    Upload {
        /// Note to upload (nothing is active if omitted or missing).
        note: Option<PathBuf>,

        /// Group to use instead of prompting for one.
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Print the record that would be uploaded, without sending it.
    Preview {
        /// Note to preview.
        note: Option<PathBuf>,
    },

    /// Show or change settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show current settings.
    Show,

    /// Set the upload url.
    SetUrl {
        /// Endpoint receiving the notes.
        url: String,
    },
}
