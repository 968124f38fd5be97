//! `merge` command implementation.

use std::collections::HashMap;

use anyhow::{Context, Result};
use contracts::{MergeBlueprint, SinkConfig, SinkType, StreamConfig};
use tracing::info;

use crate::cli::MergeArgs;
use crate::error::CliError;
use crate::pipeline::{Pipeline, PipelineConfig};

/// Execute the `merge` command
pub fn run_merge(args: &MergeArgs) -> Result<()> {
    let blueprint = build_blueprint(args)?;

    info!(
        left = %blueprint.left.path.display(),
        right = %blueprint.right.path.display(),
        sinks = blueprint.sinks.len(),
        "Configuration loaded"
    );

    let pipeline = Pipeline::new(PipelineConfig {
        blueprint,
        dry_run: args.dry_run,
    });
    let stats = pipeline.run().context("Merge run failed")?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&stats).context("Failed to serialize run summary")?;
        println!("{}", json);
    } else {
        for stream in &stats.streams {
            println!("{} frequency: {} Hz", stream.name, stream.frequency_hz);
        }
        stats.print_summary();
    }

    info!(
        rows = stats.merged_rows(),
        cols = stats.merged_cols,
        duration_secs = stats.duration.as_secs_f64(),
        "Merge completed"
    );

    if !stats.sinks_failed.is_empty() {
        return Err(CliError::SinksFailed {
            failed: stats.sinks_failed.len(),
            total: stats.sinks_failed.len() + stats.sinks_succeeded.len(),
        }
        .into());
    }
    Ok(())
}

/// Load the config file (if any) and apply command-line overrides.
fn build_blueprint(args: &MergeArgs) -> Result<MergeBlueprint> {
    let mut blueprint = match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config_not_found(path.display().to_string()).into());
            }
            config_loader::ConfigLoader::load_from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => blueprint_from_flags(args)?,
    };

    apply_overrides(&mut blueprint, args);
    config_loader::validate(&blueprint).context("Invalid merge settings")?;
    Ok(blueprint)
}

fn blueprint_from_flags(args: &MergeArgs) -> Result<MergeBlueprint, CliError> {
    let (Some(left), Some(right)) = (&args.left, &args.right) else {
        return Err(CliError::missing_input(
            "pass --config, or both --left and --right",
        ));
    };
    if args.output.is_none() && !args.dry_run {
        return Err(CliError::missing_input("pass --output, or use --dry-run"));
    }

    Ok(MergeBlueprint {
        version: Default::default(),
        left: StreamConfig::new(&args.left_name, left),
        right: StreamConfig::new(&args.right_name, right),
        sinks: Vec::new(),
    })
}

fn apply_overrides(blueprint: &mut MergeBlueprint, args: &MergeArgs) {
    let streams = [
        (&mut blueprint.left, &args.left, args.left_sep),
        (&mut blueprint.right, &args.right, args.right_sep),
    ];
    for (stream, path, separator) in streams {
        if let Some(path) = path {
            stream.path = path.clone();
        }
        if let Some(sep) = separator {
            stream.separator = sep;
        }
        if let Some(unit) = args.unit {
            stream.unit = unit;
        }
        if let Some(kind) = args.numeric_type {
            stream.numeric_type = kind;
        }
        if args.header {
            stream.want_header = true;
        }
    }

    let wants_file_sink =
        args.output.is_some() || args.out_sep.is_some() || args.precision.is_some();
    if !wants_file_sink {
        return;
    }

    let sink = match blueprint
        .sinks
        .iter()
        .position(|s| s.sink_type == SinkType::File)
    {
        Some(idx) => &mut blueprint.sinks[idx],
        None => {
            blueprint.sinks.push(SinkConfig {
                name: "output".to_string(),
                sink_type: SinkType::File,
                params: HashMap::new(),
            });
            let last = blueprint.sinks.len() - 1;
            &mut blueprint.sinks[last]
        }
    };

    if let Some(output) = &args.output {
        sink.params
            .insert("path".to_string(), output.display().to_string());
    }
    if let Some(sep) = args.out_sep {
        sink.params.insert("separator".to_string(), sep.to_string());
    }
    if let Some(precision) = args.precision {
        sink.params
            .insert("precision".to_string(), precision.to_string());
    }
}
