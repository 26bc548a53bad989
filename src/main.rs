//! Tile Layer Editor (headless).
//!
//! Liest pro Zeile einen JSON-Werkzeugaufruf von stdin und gibt pro Aufruf
//! eine Statuszeile aus.
//!
//! Aufruf: `tile-layer-editor [MAP.json] [--out OUT.json]`

use std::io::{BufRead, Write};

use clap::Parser;
use tile_layer_editor::{invoke_tool_json, AppController, AppIntent, AppState, EditorOptions};

/// Kommandozeilenargumente.
#[derive(Debug, Parser)]
#[command(
    name = "tile-layer-editor",
    about = "Headless Tile-Layer-Editor: liest JSON-Werkzeugaufrufe von stdin",
    version
)]
struct CliArgs {
    /// Map-Datei (JSON), die vor dem ersten Aufruf geladen wird
    map: Option<String>,

    /// Zieldatei, in die die Map nach stdin-Ende gespeichert wird
    #[arg(long)]
    out: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Tile Layer Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    if let Some(path) = args.map.clone() {
        controller.handle_intent(&mut state, AppIntent::LoadRequested { path })?;
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let status = match invoke_tool_json(&mut controller, &mut state, &line) {
            Ok(status) => status,
            Err(e) => {
                log::warn!("Werkzeugaufruf fehlgeschlagen: {:#}", e);
                format!("Fehler: {:#}", e)
            }
        };
        writeln!(stdout, "{}", status)?;
    }

    if let Some(path) = args.out {
        controller.handle_intent(&mut state, AppIntent::SaveRequested { path: Some(path) })?;
    }

    log::info!(
        "Beendet nach {} Commands, {} benannte Layer",
        state.command_log.len(),
        state.layer_count()
    );
    Ok(())
}
