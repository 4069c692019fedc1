use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use strm_sync::export::config::DEFAULT_CONFIG_PATH;
use strm_sync::export::FsPointerStore;
use strm_sync::{sync_manifest, ManifestSource, SyncConfig};

#[derive(Parser, Debug)]
#[command(name = "strm-sync")]
#[command(about = "Sync an M3U playlist into a tree of .strm pointer files", long_about = None)]
struct Args {
    /// Path to the config/ledger file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Manifest URL or local path (saved to the config for later runs)
    #[arg(short = 's', long)]
    source: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    log::info!("strm-sync - M3U to STRM");
    log::info!("=======================");

    let config_path = PathBuf::from(shellexpand::tilde(&args.config).as_ref());
    let mut config = SyncConfig::load(&config_path)?;

    // Resolve manifest source: flag, then config, then ask
    let source = match args.source.as_deref() {
        Some(raw) => {
            let source = ManifestSource::detect(raw);
            remember_source(&mut config, &source, &config_path);
            source
        }
        None => match config.source() {
            Some(source) => source,
            None => match prompt_source()? {
                Some(source) => {
                    remember_source(&mut config, &source, &config_path);
                    source
                }
                None => {
                    log::warn!("No manifest source given, nothing to do");
                    return Ok(());
                }
            },
        },
    };

    match config.last_sync {
        Some(last) => log::info!("Last sync: {}", last.format("%Y-%m-%d %H:%M:%S")),
        None => log::info!("Last sync: never"),
    }
    log::info!("Items already processed: {}", config.processed_items.len());

    // Fetch failures abort before anything is parsed
    let text = source.fetch()?;

    let report = sync_manifest(&text, &mut config, FsPointerStore::new());

    if let Err(e) = config.save(&config_path) {
        log::warn!("Could not save config, next run may rewrite existing files: {:#}", e);
    }

    log::info!("Sync finished!");
    log::info!("  New pointer files: {}", report.outcome.created);
    log::info!("  Skipped/existing:  {}", report.outcome.skipped);
    log::info!("  Errors:            {}", report.outcome.errors);

    Ok(())
}

/// Store a newly chosen source and persist it right away
fn remember_source(config: &mut SyncConfig, source: &ManifestSource, config_path: &Path) {
    if config.source().as_ref() == Some(source) {
        return;
    }

    log::info!("Using manifest source: {}", source);
    config.set_source(source);
    if let Err(e) = config.save(config_path) {
        log::warn!("Could not save config: {:#}", e);
    }
}

/// Ask on stdin for a manifest URL or path; `None` on empty input
fn prompt_source() -> Result<Option<ManifestSource>> {
    println!("No manifest source configured.");
    print!("Manifest URL or file path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(ManifestSource::detect(answer)))
}
