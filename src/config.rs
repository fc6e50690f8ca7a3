use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
};
use toml::{Table, Value};

use crate::{constants, error::MyError, model::category::Category};

#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct CliOptions {
    /// Directory scanned recursively for .m3u/.m3u8 files (default: ./source).
    #[arg(short = 's', long = "source")]
    pub source_dir: Option<PathBuf>,

    /// Directory the sorted playlists are written to (default: output).
    #[arg(short = 'o', long = "output")]
    pub output_dir: Option<PathBuf>,

    /// Hostname whose streams go to the provider playlist (default: ott.mobaibox.com).
    #[arg(long = "hostname")]
    pub hostname: Option<String>,

    /// Path to the config file (default: <config_dir>/m3usort/m3usort.toml).
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Path to the log file (default: <cache_dir>/m3usort.log).
    #[arg(short = 'l', long = "log")]
    pub log_file: Option<PathBuf>,

    /// Print logs to stderr (default: false).
    #[arg(long = "stderr")]
    pub log_stderr: bool,

    /// Don't print progress to stdout (default: false).
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Debug)]
pub struct ScanConfig {
    pub source_dir: PathBuf,
    pub hostname: String,
}

#[derive(Debug)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub hostname_file: PathBuf,
    pub ipv4_file: PathBuf,
    pub ipv6_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct Config {
    pub scan_config: ScanConfig,
    pub output_config: OutputConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(constants::DEFAULT_SOURCE_DIR),
            hostname: constants::DEFAULT_HOSTNAME.into(),
        }
    }
}

impl ScanConfig {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let mut config = Self::default();
        let table = content.as_ref().parse::<Table>()?;
        for (key, val) in table {
            match (key.as_str(), val) {
                ("source_dir", Value::String(source_dir)) => {
                    config.source_dir = source_dir.into();
                }
                ("hostname", Value::String(hostname)) => {
                    config.hostname = hostname;
                }
                _ => (),
            }
        }

        Ok(config)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            hostname_file: PathBuf::from(constants::DEFAULT_HOSTNAME_FILE),
            ipv4_file: PathBuf::from(constants::DEFAULT_IPV4_FILE),
            ipv6_file: PathBuf::from(constants::DEFAULT_IPV6_FILE),
        }
    }
}

impl OutputConfig {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let mut config = Self::default();
        let table = content.as_ref().parse::<Table>()?;
        for (key, val) in table {
            match (key.as_str(), val) {
                ("output_dir", Value::String(output_dir)) => {
                    config.output_dir = output_dir.into();
                }
                ("hostname_file", Value::String(file)) => {
                    config.hostname_file = file.into();
                }
                ("ipv4_file", Value::String(file)) => {
                    config.ipv4_file = file.into();
                }
                ("ipv6_file", Value::String(file)) => {
                    config.ipv6_file = file.into();
                }
                _ => (),
            }
        }

        Ok(config)
    }

    /// Where the playlist of `category` goes (file names are relative to `output_dir`).
    pub fn path_for(&self, category: Category) -> PathBuf {
        let file = match category {
            Category::Hostname => &self.hostname_file,
            Category::Ipv4 => &self.ipv4_file,
            Category::Ipv6 => &self.ipv6_file,
        };

        self.output_dir.join(file)
    }
}

impl Config {
    pub fn try_new(content: impl AsRef<str>) -> Result<Self> {
        let scan_config = ScanConfig::try_new(&content)?;
        let output_config = OutputConfig::try_new(&content)?;

        Ok(Self {
            scan_config,
            output_config,
        })
    }

    /// Reads the config from `path`, or from the default location if `path` is `None`.
    /// Only an explicitly given file is required to exist.
    pub fn try_from_file(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(config_dir) = dirs::config_dir() else {
                    return Ok(Self::default());
                };
                let default_path = config_dir
                    .join(constants::DEFAULT_CONFIG_DIR)
                    .join(constants::DEFAULT_CONFIG_FILE);
                if !default_path.is_file() {
                    return Ok(Self::default());
                }
                default_path
            }
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            anyhow!(MyError::Config(format!(
                "cannot read `{}`: {}",
                path.to_string_lossy(),
                e
            )))
        })?;
        log::info!("using config file `{}`", path.to_string_lossy());

        Self::try_new(content)
    }

    pub fn merge_with_cli(self, cli_opts: &CliOptions) -> Self {
        let scan_config = ScanConfig {
            source_dir: cli_opts
                .source_dir
                .clone()
                .unwrap_or(self.scan_config.source_dir),
            hostname: cli_opts
                .hostname
                .clone()
                .unwrap_or(self.scan_config.hostname),
        };
        let output_config = OutputConfig {
            output_dir: cli_opts
                .output_dir
                .clone()
                .unwrap_or(self.output_config.output_dir),
            ..self.output_config
        };

        Self {
            scan_config,
            output_config,
        }
    }

    pub fn validate(&self) -> Result<()> {
        // an empty needle would put every stream in the provider playlist
        if self.scan_config.hostname.is_empty() {
            bail!(MyError::Config("hostname must not be empty".into()));
        }

        Ok(())
    }
}
