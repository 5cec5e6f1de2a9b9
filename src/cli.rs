use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::config::ConfigFile;

/// Submit dependency graphs for security scanning and manage build info
#[derive(Parser, Debug)]
#[command(name = "artifact-scan")]
#[command(version)]
#[command(
    about = "Submit dependency graphs for vulnerability and license scanning, and publish build info",
    long_about = None
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection and logging options shared by every subcommand
#[derive(ClapArgs, Debug, Default)]
pub struct GlobalArgs {
    /// Path to a config file (defaults to ./artifact-scan.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the scanner service
    #[arg(long, global = true, value_name = "URL")]
    pub xray_url: Option<String>,

    /// Base URL of the artifact repository
    #[arg(long, global = true, value_name = "URL")]
    pub artifactory_url: Option<String>,

    #[arg(long, global = true)]
    pub user: Option<String>,

    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Access token; takes precedence over user/password
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// Log level or filter directive (RUST_LOG wins when set)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format: pretty or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a dependency graph and wait for the results
    Scan(ScanArgs),
    /// Publish a build-info document
    PublishBuild(PublishBuildArgs),
    /// Fetch a published build-info document
    GetBuild(GetBuildArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    /// Dependency graph JSON file
    #[arg(long, value_name = "FILE")]
    pub graph: PathBuf,

    /// Project key whose policies apply
    #[arg(long)]
    pub project: Option<String>,

    /// Repository path whose policies apply
    #[arg(long)]
    pub repo_path: Option<String>,

    /// Watch name; can be specified multiple times
    #[arg(long = "watch", value_name = "WATCH")]
    pub watches: Vec<String>,

    /// Include all vulnerabilities in the results
    #[arg(long)]
    pub vulnerabilities: bool,

    /// Include all licenses in the results
    #[arg(long)]
    pub licenses: bool,

    /// Give up waiting for results after this many minutes (default 15)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_wait_minutes: Option<u64>,

    /// Output format: json or markdown
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct PublishBuildArgs {
    /// Build-info JSON file
    #[arg(long, value_name = "FILE")]
    pub build_info: PathBuf,

    #[arg(long)]
    pub project: Option<String>,

    /// Print the document instead of publishing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(ClapArgs, Debug)]
pub struct GetBuildArgs {
    /// Build name
    #[arg(long)]
    pub name: String,

    /// Build number
    #[arg(long)]
    pub number: String,

    #[arg(long)]
    pub project: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values given on the command line, shaped as a config layer
    pub fn config_overrides(&self) -> ConfigFile {
        let global = &self.global;
        let mut overrides = ConfigFile {
            xray_url: global.xray_url.clone(),
            artifactory_url: global.artifactory_url.clone(),
            user: global.user.clone(),
            password: global.password.clone(),
            access_token: global.access_token.clone(),
            log_level: global.log_level.clone(),
            log_format: global.log_format.clone(),
            ..ConfigFile::default()
        };

        match &self.command {
            Command::Scan(scan) => {
                overrides.project = scan.project.clone();
                overrides.repo_path = scan.repo_path.clone();
                overrides.watches = Some(scan.watches.clone());
                overrides.max_wait_minutes = scan.max_wait_minutes;
            }
            Command::PublishBuild(publish) => overrides.project = publish.project.clone(),
            Command::GetBuild(get) => overrides.project = get.project.clone(),
        }
        overrides
    }
}
