//! # stencil CLI
//!
//! Entry point for the `stencil` binary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stencil_cli::check::{run_check, CheckArgs};
use stencil_cli::lint::{run_lint, LintArgs};
use stencil_cli::schema::{run_schema, SchemaArgs};

/// Typed component declarations: lint manifests, inspect channel schemas,
/// and check render requests.
#[derive(Parser, Debug)]
#[command(name = "stencil", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Validator configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve every component declaration in a manifest.
    Lint(LintArgs),
    /// Print the compiled JSON Schema of a declared component.
    Schema(SchemaArgs),
    /// Validate a render request document against its component.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Lint(args) => run_lint(args),
        Commands::Schema(args) => run_schema(args),
        Commands::Check(args) => stencil_cli::load_config(cli.config.as_deref())
            .and_then(|config| run_check(args, &config)),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::Channel;

    #[test]
    fn parses_lint() {
        let cli = Cli::try_parse_from(["stencil", "lint", "components.yaml"]).unwrap();
        match cli.command {
            Commands::Lint(args) => assert_eq!(args.manifest, PathBuf::from("components.yaml")),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_schema_with_channel() {
        let cli = Cli::try_parse_from([
            "stencil",
            "schema",
            "components.yaml",
            "--component",
            "TestComponent",
            "--channel",
            "kwargs",
        ])
        .unwrap();
        match cli.command {
            Commands::Schema(args) => {
                assert_eq!(args.component, "TestComponent");
                assert_eq!(args.channel, Some(Channel::Kwargs));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_channel() {
        let result = Cli::try_parse_from([
            "stencil",
            "schema",
            "components.yaml",
            "--component",
            "TestComponent",
            "--channel",
            "context",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_check_with_global_flags() {
        let cli = Cli::try_parse_from([
            "stencil",
            "-vv",
            "check",
            "components.yaml",
            "--request",
            "request.json",
            "--config",
            "validator.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("validator.yaml")));
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn check_requires_request() {
        assert!(Cli::try_parse_from(["stencil", "check", "components.yaml"]).is_err());
    }
}
