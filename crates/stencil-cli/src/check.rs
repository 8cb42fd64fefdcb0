//! # Check — Validate a render request document offline.
//!
//! A request document names a declared component and carries the values a
//! render would see:
//!
//! ```yaml
//! component: TestComponent
//! args: [123, "str", 456]
//! kwargs: { var1: 1, var2: str, var3: 456 }
//! slots: { slot1: SLOT1, slot2: { dynamic: true } }
//! data: { data1: 1, data2: str }    # optional
//! ```
//!
//! Slot values are given in their validated form: a string for literal
//! content, `{dynamic: true}` for a slot function. Channels are checked in
//! render order (args, kwargs, data, slots) and the first failure stops the
//! check.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{json, Value};
use stencil_core::Channel;
use stencil_render::ComponentClass;
use stencil_schema::load_document;
use stencil_validate::{SchemaValidationExtension, ValidatorConfig, ValidatorError};

use crate::load_manifest;

/// Check subcommand arguments.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the component manifest (YAML).
    pub manifest: PathBuf,

    /// Path to the render request document (YAML or JSON).
    #[arg(long)]
    pub request: PathBuf,
}

const RENDER_ORDER: [Channel; 4] = [Channel::Args, Channel::Kwargs, Channel::Data, Channel::Slots];

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, config: &ValidatorConfig) -> Result<u8> {
    let manifest = load_manifest(&args.manifest)?;
    let request = load_document(&args.request)
        .with_context(|| format!("failed to load request {}", args.request.display()))?;
    let Value::Object(request) = request else {
        bail!("request {} must be a mapping", args.request.display());
    };

    let component = request
        .get("component")
        .and_then(Value::as_str)
        .context("request is missing a 'component' name")?;
    let decl = manifest.find(component).with_context(|| {
        format!(
            "component '{component}' is not declared in {}",
            args.manifest.display()
        )
    })?;

    let class = ComponentClass::new(decl.name.clone(), decl.types.clone());
    let validator = SchemaValidationExtension::new(config.clone());

    println!("Checking {} against {}", args.request.display(), decl.name);
    for channel in RENDER_ORDER {
        let value = match (channel, request.get(channel.as_str())) {
            (_, Some(value)) => value.clone(),
            (Channel::Data, None) => {
                println!("  {:<7} skipped (not provided)", channel.as_str());
                continue;
            }
            (Channel::Args, None) => json!([]),
            (_, None) => json!({}),
        };

        if !config.is_enabled(channel) {
            println!("  {:<7} skipped (disabled)", channel.as_str());
            continue;
        }
        if validator.get_schema(&class, channel)?.is_none() {
            println!("  {:<7} unchecked", channel.as_str());
            continue;
        }

        match validator.validate_channel(&class, channel, &value) {
            Ok(()) => println!("  {:<7} ok", channel.as_str()),
            Err(ValidatorError::Channel(failure)) => {
                println!("  {:<7} FAILED", channel.as_str());
                println!();
                println!("{failure}");
                return Ok(1);
            }
            Err(other) => return Err(other.into()),
        }
    }

    println!();
    println!("Request is valid.");
    Ok(0)
}
