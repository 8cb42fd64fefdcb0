//! # Schema — Print the compiled JSON Schema of a declared component.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Map, Value};
use stencil_core::Channel;
use stencil_schema::resolve_spec;

use crate::load_manifest;

/// Schema subcommand arguments.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Path to the component manifest (YAML).
    pub manifest: PathBuf,

    /// Component name.
    #[arg(long)]
    pub component: String,

    /// Print only this channel (args, kwargs, slots, data).
    #[arg(long)]
    pub channel: Option<Channel>,
}

/// Build the schema document: one channel's schema (or `null` when the
/// channel is unchecked), or an object of every checked channel.
pub fn component_schema(args: &SchemaArgs) -> Result<Value> {
    let manifest = load_manifest(&args.manifest)?;
    let decl = manifest.find(&args.component).with_context(|| {
        format!(
            "component '{}' is not declared in {}",
            args.component,
            args.manifest.display()
        )
    })?;
    let resolved = resolve_spec(&decl.types, &decl.name)?;

    Ok(match args.channel {
        Some(channel) => resolved
            .get(channel)
            .map(|s| s.json_schema().clone())
            .unwrap_or(Value::Null),
        None => Value::Object(
            resolved
                .iter()
                .map(|(c, s)| (c.to_string(), s.json_schema().clone()))
                .collect::<Map<String, Value>>(),
        ),
    })
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let schema = component_schema(args)?;
    if schema.is_null() {
        if let Some(channel) = args.channel {
            tracing::info!(component = %args.component, channel = %channel, "channel is unchecked");
        }
    }
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(0)
}
