//! sidediff: side-by-side text diff tool
//!
//! Compares two text files line by line and renders the result as aligned
//! columns, JSON, or a short summary.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sidediff::{
    cli,
    config::{
        discover_config_file, generate_full_example_config, generate_json_schema, load_or_default,
        user_config_dir, AppConfig, ConfigPreset, DiffConfigBuilder, Validatable,
    },
    diff::InlineGranularity,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nOutput Formats:",
        "\n  side-by-side, json, summary",
        "\n\nHighlight Granularity:",
        "\n  word, char"
    )
}

#[derive(Parser)]
#[command(name = "sidediff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Side-by-side text diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No differences (or differences without --fail-on-change)
    1  Differences found with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Two-column diff in the terminal
    sidediff diff old.txt new.txt

    # Only changed regions with three lines of context
    sidediff diff old.txt new.txt -o side-by-side --context 3

    # Character-level highlights
    sidediff diff old.txt new.txt --granularity char

    # CI check: JSON hunks, exit 1 on differences
    sidediff diff expected.txt actual.txt --preset ci -O diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the left (original) file
    left: PathBuf,

    /// Path to the right (modified) file
    right: PathBuf,

    /// Output format (auto: side-by-side if interactive, summary otherwise)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Intra-line highlight granularity
    #[arg(long, value_enum)]
    granularity: Option<InlineGranularity>,

    /// Show only N unchanged lines around each change
    #[arg(short = 'C', long)]
    context: Option<usize>,

    /// Total width of side-by-side output (defaults to terminal width)
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Hide line numbers in side-by-side output
    #[arg(long)]
    no_line_numbers: bool,

    /// Exit with code 1 if the files differ
    #[arg(long)]
    fail_on_change: bool,

    /// Named preset: default, precise, fast, ci
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two text files
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sidediff.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

/// Dispatch to command handlers
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let (mut app_config, loaded_from) = load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            if let Some(name) = &args.preset {
                let preset = ConfigPreset::from_name(name).with_context(|| {
                    let names: Vec<_> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                    format!("unknown preset '{name}' (valid: {})", names.join(", "))
                })?;
                app_config.merge(&AppConfig::from_preset(preset));
            }

            let mut overrides = AppConfig::builder()
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .context(args.context)
                .fail_on_change(args.fail_on_change)
                .quiet(cli.quiet)
                .build();
            if let Some(format) = args.output {
                overrides.output.format = format;
            }
            if let Some(granularity) = args.granularity {
                overrides.engine.granularity = granularity;
            }
            overrides.output.width = args.width;
            overrides.output.show_line_numbers = !args.no_line_numbers;
            app_config.merge(&overrides);

            let config = DiffConfigBuilder::from_app_config(&app_config)
                .left_path(args.left)
                .right_path(args.right)
                .build()?;

            let errors = config.validate();
            if !errors.is_empty() {
                let details: Vec<_> = errors.iter().map(ToString::to_string).collect();
                anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
            }

            cli::run_diff(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sidediff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".sidediff.yaml",
                    ".sidediff.yml",
                    "sidediff.yaml",
                    "sidediff.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sidediff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_full_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
