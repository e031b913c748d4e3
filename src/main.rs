use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tool_util::collections::dedup_stable;
use tool_util::config::{self, Config};
use tool_util::env::{render_path_with_env, render_with_env};
use tool_util::module::{join_module_version, ModuleVersion};
use tool_util::platform::Platform;
use tool_util::process::exit_code_of;
use tool_util::ui;
use tool_util::version::{is_regular_version, sort_semantic_versions};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "TOOL_UTIL_LOG";

#[derive(clap::Parser)]
#[command(
    name = "tool-util",
    version,
    about = "Version, environment and path helpers for toolchain managers"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort versions by semantic version precedence
    SortVersions {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Remove duplicate items, keeping first occurrences
    Dedup { items: Vec<String> },
    /// Replace $NAME references with environment values
    Render {
        template: String,
        #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        set: Vec<(String, String)>,
    },
    /// Replace $NAME references in a path and clean the result
    RenderPath {
        path: String,
        #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        set: Vec<(String, String)>,
    },
    /// Split a path@version module spec
    Split { spec: String },
    /// Join a module path and version as path@version
    Join { path: String, version: String },
    /// Print the platform-specific file name of a binary
    BinName {
        name: String,
        #[arg(long, help = "OS name to resolve for (e.g. windows, linux)")]
        os: Option<String>,
    },
    /// Exit successfully if VERSION has the form vX.Y.Z
    IsRegular { version: String },
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(exit_code_of(&e));
        }
    }
}

/// Runs the selected command. `Ok(false)` means a check command failed.
fn run(args: Args) -> Result<bool> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    match args.command {
        Command::SortVersions { items } => {
            let (malformed, sorted) = sort_semantic_versions(&items);
            ui::display_version_report(&malformed, &sorted);
        }
        Command::Dedup { items } => {
            ui::display_items(&dedup_stable(&items));
        }
        Command::Render { template, set } => {
            let overrides = config.env_overrides(set);
            ui::display_value(&render_with_env(&template, &overrides));
        }
        Command::RenderPath { path, set } => {
            let overrides = config.env_overrides(set);
            ui::display_value(&render_path_with_env(&path, &overrides));
        }
        Command::Split { spec } => {
            let module: ModuleVersion = spec.parse()?;
            ui::display_value(&ui::format_module_split(&module.path, &module.version));
        }
        Command::Join { path, version } => {
            ui::display_value(&join_module_version(&path, &version));
        }
        Command::BinName { name, os } => {
            let platform = resolve_platform(&config, os.as_deref());
            ui::display_value(&platform.binary_name(&name));
        }
        Command::IsRegular { version } => {
            let regular = is_regular_version(&version);
            ui::display_value(if regular { "true" } else { "false" });
            return Ok(regular);
        }
    }

    Ok(true)
}

/// Command-line OS beats the config file, which beats the host.
fn resolve_platform(config: &Config, os: Option<&str>) -> Platform {
    match os {
        Some(os) => Platform::from_os(os),
        None => config.platform(),
    }
}
