//! # Lint — Resolve every declaration in a manifest.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use stencil_schema::resolve_spec;

use crate::load_manifest;

/// Lint subcommand arguments.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Path to the component manifest (YAML).
    pub manifest: PathBuf,
}

/// Execute the lint subcommand.
pub fn run_lint(args: &LintArgs) -> Result<u8> {
    let manifest = load_manifest(&args.manifest)?;
    if manifest.components.is_empty() {
        tracing::warn!(manifest = %args.manifest.display(), "manifest declares no components");
    }

    let mut failures = 0usize;
    for decl in &manifest.components {
        match resolve_spec(&decl.types, &decl.name) {
            Ok(resolved) => {
                let channels: Vec<String> = resolved.iter().map(|(c, _)| c.to_string()).collect();
                if channels.is_empty() {
                    println!("  OK    {} (unchecked)", decl.name);
                } else {
                    println!("  OK    {} ({})", decl.name, channels.join(", "));
                }
            }
            Err(e) => {
                failures += 1;
                println!("  FAIL  {}: {e}", decl.name);
            }
        }
    }

    println!();
    println!(
        "{} components, {} failed",
        manifest.components.len(),
        failures
    );
    Ok(if failures == 0 { 0 } else { 1 })
}
