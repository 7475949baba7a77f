use anyhow::Context;
use clap::Parser;
use pathkit::{init_logging, EditorState, SettingsPersistence, BUILD_DATE, VERSION};
use std::path::PathBuf;

/// Imports a robot path file, reports its paths and optionally re-exports it
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path file to import
    input: PathBuf,

    /// Write the imported document back out to this file
    #[arg(short = 'o', long)]
    export: Option<PathBuf>,

    /// Preferences file (defaults to the user config directory)
    #[arg(long)]
    preferences: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();
    tracing::info!("PathKit {} (built {})", VERSION, BUILD_DATE);

    let settings_path = match args.preferences {
        Some(path) => path,
        None => SettingsPersistence::default_path()?,
    };
    let settings = SettingsPersistence::load_or_default(settings_path)?;

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let mut state = EditorState::new(settings.preferences().clone());
    state
        .import_file(&content)
        .with_context(|| format!("failed to import {}", args.input.display()))?;

    for path in state.store.paths() {
        let path = state.store.path(*path);
        let controls: usize = path
            .segments()
            .iter()
            .map(|s| state.store.segment(*s).controls().len())
            .sum();
        tracing::info!(
            "{} '{}': {} segment(s), {} control(s), speed {}..{}",
            path.uid,
            path.name,
            path.segments().len(),
            controls,
            path.pc.speed_limit.from,
            path.pc.speed_limit.to
        );
    }

    if let Some(output) = args.export {
        let exported = state.export_file()?;
        std::fs::write(&output, exported)
            .with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!("Exported to {}", output.display());
    }

    Ok(())
}
