// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod error;
mod logger;

use std::{io::Read, path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use fxskill::{render, ConfigError, ConfigRoot, FormulaFunction, FunctionView, RenderMode, Value};
use logger::Logger;

use self::error::ErrorPrinter;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file, `fxskill.toml` when present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON encoded value
    Render {
        /// Read from standard input when omitted
        file: Option<PathBuf>,

        #[arg(short, long)]
        minimal: bool,
    },

    /// Show the function described by the configuration
    Describe,
}

const DEFAULT_CONFIG_FILE: &str = "fxskill.toml";

fn main() {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    if let Err(e) = run(args) {
        ErrorPrinter::from_anyhow(&e).print();
        exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if config.log.debug {
        Logger::enable_debug();
    }

    match args.command {
        Commands::Render { file, minimal } => {
            let value = read_value(file.as_deref(), std::io::stdin().lock())?;
            println!("{}", render(&value, render_mode(minimal, &config)));
        }

        Commands::Describe => {
            let Some(skill) = config.skill else {
                ErrorPrinter::new(ConfigError::MissingSkill)
                    .hint(format!("add a [skill] section to {DEFAULT_CONFIG_FILE}"))
                    .print();
                exit(1);
            };

            let function = FormulaFunction::from_config((), skill)?;
            print_function_view(&function.describe());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigRoot> {
    if let Some(path) = path {
        return Ok(ConfigRoot::from_path(path)?);
    }

    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        return Ok(ConfigRoot::from_path(path)?);
    }

    log::trace!("No configuration file, using defaults");
    Ok(ConfigRoot::default())
}

/// `--minimal` wins over the configured mode.
fn render_mode(minimal: bool, config: &ConfigRoot) -> RenderMode {
    if minimal {
        RenderMode::Minimal
    } else {
        config.render.mode
    }
}

/// Reads from `file`, or from `stdin` when no file is given.
fn read_value(file: Option<&Path>, mut stdin: impl Read) -> anyhow::Result<Value> {
    let source = match file {
        Some(file) => std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?,

        None => {
            let mut source = String::new();
            stdin.read_to_string(&mut source)
                .context("Failed to read standard input")?;
            source
        }
    };

    let value = serde_json::from_str(&source).context("Input is not valid JSON")?;
    Ok(value)
}

fn print_function_view(view: &FunctionView) {
    println!("{}.{}", view.plugin_name.blue().bold(), view.name.bold());

    if !view.description.is_empty() {
        println!("  {}", view.description);
    }

    for parameter in &view.parameters {
        let default = if parameter.default_value.is_empty() {
            String::new()
        } else {
            format!(" (default: {})", parameter.default_value)
        };

        println!("  {}: {}{default}", parameter.name.yellow(), parameter.description);
    }
}
