//! Note Uploader - Send the active note to a remote HTTP endpoint.
//!
//! Reads a markdown note, strips its tag header, asks for a group label
//! and POSTs the result as JSON to the configured url.
//!
//!   note-uploader settings set-url https://notes.example.com/api
//!   note-uploader upload notes/plan.md             # prompts for a group
//!   note-uploader upload notes/plan.md -g work     # no prompt
//!   note-uploader preview notes/plan.md            # print the record only

mod application;
mod cli;
mod domain;
mod infrastructure;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    build_record, DialogSurface, HostContext, NoteExporter, NoteUploaderPlugin, PresetDialog,
    Uploader,
};
use cli::{Cli, Commands, SettingsCommand};
use domain::{ActivationLifecycle, ExportOutcome, Settings, SettingsPanel};
use infrastructure::{FsVault, JsonSettingsStore, TerminalDialog, TerminalNotifier};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.unwrap_or_else(Settings::default_data_dir);
    let store = JsonSettingsStore::in_dir(&data_dir);
    tracing::debug!(path = %store.path().display(), "Using settings file");

    let exporter = NoteExporter::new(Uploader::new()?);
    let mut plugin = NoteUploaderPlugin::new(Box::new(store), exporter);
    plugin.on_activate().await?;

    let result = match cli.command {
        Commands::Upload { note, group } => cmd_upload(&plugin, note.as_deref(), group).await,
        Commands::Preview { note } => cmd_preview(note.as_deref()).await,
        Commands::Settings { action } => cmd_settings(&mut plugin, action).await,
    };

    plugin.on_deactivate().await?;
    result
}

/// Upload a note, prompting for its group unless one was given.
async fn cmd_upload(
    plugin: &NoteUploaderPlugin,
    note: Option<&std::path::Path>,
    group: Option<String>,
) -> anyhow::Result<()> {
    let vault = FsVault::open(note).await?;
    let notifier = TerminalNotifier;
    let host = HostContext {
        workspace: &vault,
        vault: &vault,
        metadata_cache: &vault,
        notifier: &notifier,
    };

    let mut dialog: Box<dyn DialogSurface> = match group {
        Some(group) => Box::new(PresetDialog::new(group)),
        None => Box::new(TerminalDialog::stdin()),
    };

    let outcome = plugin
        .on_ribbon_click(host, dialog.as_mut())
        .await
        .context("Upload failed")?;

    if outcome == ExportOutcome::Cancelled {
        println!("{}", "Upload cancelled.".dimmed());
    }

    Ok(())
}

/// Print the record for a note as JSON.
async fn cmd_preview(note: Option<&std::path::Path>) -> anyhow::Result<()> {
    let vault = FsVault::open(note).await?;
    let record = build_record(&vault, &vault, &vault).await?;

    let json = serde_json::to_string_pretty(&record).context("Failed to serialize record")?;
    println!("{json}");

    Ok(())
}

/// Show or edit settings through the settings tab.
async fn cmd_settings(
    plugin: &mut NoteUploaderPlugin,
    action: SettingsCommand,
) -> anyhow::Result<()> {
    let mut tab = plugin.settings_tab();

    if let SettingsCommand::SetUrl { url } = action {
        tab.on_url_change(url).await?;
    }

    for (label, value) in tab.display() {
        println!("{}: {}", label.bold(), value.cyan());
    }

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
