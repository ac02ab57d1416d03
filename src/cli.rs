//! Command-line interface for readycheck.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, MAX_LEVEL};
use crate::config::{RepoConfig, CONFIG_FILE_NAME};
use crate::remediation::{self, DEFAULT_MAX_ITEMS};
use crate::report::{self, Format};
use crate::scorecard;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Config template written by `init`.
const CONFIG_TEMPLATE: &str = include_str!("templates/readycheck.json");

/// Repository readiness evaluator.
///
/// Readycheck inspects the files of a repository (manifests, CI
/// definitions, tool configs, docs) and scores them against criteria
/// grouped into eight pillars. Levels unlock in order once 80% of a
/// level's applicable criteria pass.
#[derive(Parser)]
#[command(name = "readycheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a repository and print its scorecard
    #[command(visible_alias = "check")]
    Scan(ScanArgs),
    /// Print a remediation plan for the blocking level (never writes files)
    Plan(PlanArgs),
    /// Create a .readycheck.json config from a template
    Init(InitArgs),
    /// List the criterion catalog
    Criteria(CriteriaArgs),
}

/// Arguments shared by commands that evaluate a repository.
#[derive(Args)]
pub struct TargetArgs {
    /// Repository root to evaluate
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file (default: <PATH>/.readycheck.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: Format,
}

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Exit non-zero unless at least this level is achieved
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_LEVEL as i64))]
    pub min_level: Option<u8>,

    /// Show every criterion result in pretty output
    #[arg(long)]
    pub details: bool,
}

/// Arguments for the plan command.
#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Maximum number of remediation items
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    pub max_items: usize,
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub output: PathBuf,
}

/// Arguments for the criteria command.
#[derive(Args)]
pub struct CriteriaArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: Format,
}

/// Load the config named on the command line, or the one at the root.
fn load_config(target: &TargetArgs) -> anyhow::Result<RepoConfig> {
    let config = match &target.config {
        Some(path) => RepoConfig::parse_file(path)?,
        None => RepoConfig::load(&target.path)?,
    };
    Ok(config)
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    let config = match load_config(&args.target) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let card = match scorecard::evaluate_with(&args.target.path, &config) {
        Ok(card) => card,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    match args.target.format {
        Format::Json => report::write_json(&card)?,
        Format::Pretty => report::write_pretty(&card, args.details),
    }

    match args.min_level {
        Some(level) if !card.reaches(level) => Ok(EXIT_FAILED),
        _ => Ok(EXIT_SUCCESS),
    }
}

/// Run the plan command.
pub fn run_plan(args: &PlanArgs) -> anyhow::Result<i32> {
    let config = match load_config(&args.target) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let card = match scorecard::evaluate_with(&args.target.path, &config) {
        Ok(card) => card,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let plan = remediation::build_plan(&card, &config, args.max_items);

    match args.target.format {
        Format::Json => report::write_json(&plan)?,
        Format::Pretty => report::write_plan_pretty(&plan),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to describe your repository", args.output.display());
    println!("  2. Run: readycheck scan .");

    Ok(EXIT_SUCCESS)
}

/// Run the criteria command.
pub fn run_criteria(args: &CriteriaArgs) -> anyhow::Result<i32> {
    let catalog = Catalog::builtin()?;
    match args.format {
        Format::Json => report::write_catalog_json(&catalog)?,
        Format::Pretty => report::write_catalog_pretty(&catalog),
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses() {
        let config: RepoConfig = serde_json::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(crate::config::validate(&config).is_ok());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&output, "{}").unwrap();
        let code = run_init(&InitArgs { output: output.clone() }).unwrap();
        assert_eq!(code, EXIT_ERROR);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "{}");
    }

    #[test]
    fn test_init_writes_template() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("nested").join(CONFIG_FILE_NAME);
        let code = run_init(&InitArgs { output: output.clone() }).unwrap();
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn test_parse_scan_args() {
        let cli = Cli::try_parse_from(["readycheck", "-vv", "check", "repo", "--min-level", "3"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.target.path, PathBuf::from("repo"));
                assert_eq!(args.min_level, Some(3));
                assert_eq!(args.target.format, Format::Pretty);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_min_level_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["readycheck", "scan", "--min-level", "6"]).is_err());
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let args = ScanArgs {
            target: TargetArgs {
                path: temp.path().join("missing"),
                config: None,
                format: Format::Json,
            },
            min_level: None,
            details: false,
        };
        assert_eq!(run_scan(&args).unwrap(), EXIT_ERROR);
    }
}
