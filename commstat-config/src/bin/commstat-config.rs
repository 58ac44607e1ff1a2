//! Validates and prints the commstat page configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use commstat_config::loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV};
use commstat_config::{CommstatConfig, ConfigSource};
use env_logger::{Builder, Target};
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "commstat-config",
    about = "Validate and inspect commstat page configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the configuration and report where it came from
    Check {
        /// Config file; defaults to the environment and working directory
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the effective configuration, defaults included
    Print {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "toml")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Toml,
    Json,
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .filter_module("commstat_config", LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }
}

fn load(file: Option<PathBuf>) -> Result<(CommstatConfig, ConfigSource)> {
    match file {
        Some(path) => {
            let config = CommstatConfig::load_from_file(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        None => CommstatConfig::load_from_env(),
    }
}

fn describe(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Default => "built-in defaults".to_string(),
        ConfigSource::EnvPath(path) => {
            format!("{} (from ${CONFIG_PATH_ENV})", path.display())
        }
        ConfigSource::EnvInline => format!("${CONFIG_JSON_ENV}"),
        ConfigSource::File(path) => path.display().to_string(),
    }
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { file } => {
            let (config, source) = load(file)?;
            println!("config ok: {}", describe(&source));
            println!(
                "community_list: form {:?}, {} fields",
                config.community_list.form_name,
                config.community_list.fields.len()
            );
            println!(
                "post_list: form {:?}, {} fields",
                config.post_list.form_name,
                config.post_list.fields.len()
            );
            println!(
                "history_chart: {:?} by {}",
                config.history_chart.title, config.history_chart.time_unit
            );
        }
        Command::Print { file, format } => {
            let (config, _) = load(file)?;
            let rendered = match format {
                Format::Toml => toml::to_string_pretty(&config)?,
                Format::Json => serde_json::to_string_pretty(&config)?,
            };
            println!("{rendered}");
        }
    }
    Ok(())
}
