use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use crate::{
    catalog::{Catalog, Summary},
    config::{CliOptions, Config},
    model::category::Classifier,
};

mod catalog;
mod config;
mod constants;
mod error;
mod utils;
mod writer;

mod model;
mod parsers;

fn run(cli_options: &CliOptions) -> Result<Summary> {
    let config =
        Config::try_from_file(cli_options.config_file.as_deref())?.merge_with_cli(cli_options);
    config.validate()?;
    let Config {
        scan_config,
        output_config,
    } = config;

    let files = utils::walk_dir(&scan_config.source_dir, &constants::PLAYLIST_EXTS)?;
    log::info!(
        "found {} playlists under `{}`",
        files.len(),
        scan_config.source_dir.to_string_lossy()
    );
    if !cli_options.quiet {
        println!("Found {} m3u files", files.len());
    }

    let classifier = Classifier::new(scan_config.hostname);
    let catalog = Catalog::from_files(&files, &classifier, |file| {
        log::info!("parsing `{}`", file.to_string_lossy());
        if !cli_options.quiet {
            println!("Parsing: {}", file.display());
        }
    });

    catalog.save(&output_config)
}

fn init_logging(cli_options: &CliOptions) {
    let level = log::LevelFilter::Info;
    if cli_options.log_stderr {
        simple_logging::log_to_stderr(level);
        return;
    }
    let log_file = cli_options.log_file.clone().unwrap_or_else(|| {
        dirs::cache_dir()
            .unwrap_or(".".into())
            .join(constants::DEFAULT_LOG_FILE)
    });
    if let Err(e) = simple_logging::log_to_file(&log_file, level) {
        eprintln!("cannot log to `{}`: {}", log_file.to_string_lossy(), e);
    }
}

fn main() -> ExitCode {
    let cli_options = CliOptions::parse();
    init_logging(&cli_options);
    match run(&cli_options) {
        Ok(summary) => {
            if !cli_options.quiet {
                print!("{}", summary);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
