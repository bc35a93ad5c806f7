//! hapspec: query a HomeKit Accessory Protocol specification from the command line.
#![allow(clippy::multiple_crate_versions)]

use clap::{ArgGroup, Parser};
use hapspec::{config, render, HapSpec, Namespace};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hapspec")]
#[command(about = "Look up services, characteristics and text in a protocol specification", long_about = None)]
#[command(group(
    ArgGroup::new("query")
        .required(true)
        .args(["service", "characteristic", "list_services", "list_characteristics", "terms"])
))]
struct Args {
    /// Look up a service definition
    #[arg(long, value_name = "NAME", num_args = 1..)]
    service: Vec<String>,

    /// Look up a characteristic definition
    #[arg(long = "char", value_name = "NAME", num_args = 1..)]
    characteristic: Vec<String>,

    /// List all services
    #[arg(long)]
    list_services: bool,

    /// List all characteristics
    #[arg(long)]
    list_characteristics: bool,

    /// Free-text search term
    #[arg(value_name = "TERM")]
    terms: Vec<String>,

    /// Markdown specification to query (overrides hapspec.toml)
    #[arg(long, value_name = "PATH")]
    spec: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cfg = config::Config::load();

    match run(&args, &cfg) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected query, returning whether anything was found.
fn run(args: &Args, cfg: &config::Config) -> hapspec::Result<bool> {
    let path = args
        .spec
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.spec_file));
    let spec = HapSpec::open(&path)?.with_options(cfg.options());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_services || args.list_characteristics {
        let namespace = if args.list_services {
            Namespace::Service
        } else {
            Namespace::Characteristic
        };
        let entries = spec.list(namespace);
        if args.json {
            render::render_json(&mut out, &entries)?;
        } else {
            render::render_listing(&mut out, namespace, &entries)?;
        }
        return Ok(true);
    }

    let lookup = if args.service.is_empty() {
        (!args.characteristic.is_empty())
            .then(|| (Namespace::Characteristic, args.characteristic.join(" ")))
    } else {
        Some((Namespace::Service, args.service.join(" ")))
    };

    if let Some((namespace, name)) = lookup {
        let found = spec.lookup(namespace, &name);
        match (&found, args.json) {
            (Some(result), true) => render::render_json(&mut out, result)?,
            (Some(result), false) => render::render_lookup(&mut out, namespace, &name, result)?,
            (None, true) => render::render_json(&mut out, &serde_json::Value::Null)?,
            (None, false) => {
                let suggestions = spec.suggest(namespace, &name);
                render::render_not_found(&mut out, namespace, &name, &suggestions)?;
            }
        }
        out.flush()?;
        return Ok(found.is_some());
    }

    let term = args.terms.join(" ");
    let hits = spec.search(&term);
    if args.json {
        render::render_json(&mut out, &hits)?;
    } else {
        render::render_search(&mut out, &term, &hits, cfg.max_results)?;
    }
    out.flush()?;
    Ok(!hits.is_empty())
}
