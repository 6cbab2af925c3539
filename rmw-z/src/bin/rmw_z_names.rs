// Copyright 2025 ZettaScale Technology
//
// Command line checker for ROS 2 names

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use rmw_z::{NameKind, Report};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Check ROS 2 topic names, namespaces and node names.
#[derive(Debug, Parser)]
#[command(name = "rmw-z-names", version)]
struct Args {
    /// Grammar to check the names against
    #[arg(short, long, value_enum, default_value_t = NameKind::Topic)]
    kind: NameKind,
    /// Print one JSON object per name
    #[arg(long)]
    json: bool,
    /// Only warn about names that are valid but too long
    #[arg(long)]
    allow_too_long: bool,
    #[arg(required = true)]
    names: Vec<String>,
}

#[derive(Serialize)]
struct Line<'a> {
    name: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

fn print_text(out: &mut impl Write, name: &str, report: &Report) -> io::Result<()> {
    match (report.description, report.invalid_index) {
        (Some(reason), Some(index)) => {
            writeln!(out, "{name}: {reason} (index {index})")?;
            // An empty name has nothing to point at.
            if index < name.len() {
                writeln!(out, "{name}")?;
                writeln!(out, "{:>width$}", "^", width = index + 1)?;
            }
        }
        _ => writeln!(out, "{name}: valid {}", report.kind)?,
    }
    Ok(())
}

/// Validate every name, print the reports and return how many were rejected.
fn run(args: &Args, out: &mut impl Write) -> io::Result<usize> {
    let mut failed = 0usize;

    for name in &args.names {
        let report = args.kind.validate(name);
        tracing::trace!(?report, "validated {name}");

        if args.json {
            serde_json::to_writer(&mut *out, &Line { name, report: &report })?;
            writeln!(out)?;
        } else {
            print_text(out, name, &report)?;
        }

        if report.valid {
            continue;
        }
        if report.too_long && args.allow_too_long {
            tracing::warn!(
                "{} '{}' is {} bytes long, accepting anyway",
                report.kind,
                name,
                name.len()
            );
            continue;
        }
        failed += 1;
    }

    if failed > 0 {
        tracing::debug!("{failed} of {} names rejected", args.names.len());
    }
    Ok(failed)
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let failed = run(&args, &mut io::stdout().lock())?;
    Ok(if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
