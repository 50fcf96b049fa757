//! poimap - Main entry point
//!
//! Command line front for the icon resolver and route tables.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use poimap::cli::{Cli, Commands};
use poimap::{
    CatalogConfig, IconCatalog, IconResolver, PoiFeature, match_route, routes_for_host,
};

/// Initialize tracing with appropriate settings
fn init_logging(verbose: bool) {
    // RUST_LOG wins; otherwise --verbose switches this crate to debug
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("poimap=debug")
    } else {
        EnvFilter::new("poimap=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    debug!("CLI arguments parsed: {:?}", cli);

    match cli.command {
        Commands::Validate { file } => {
            info!("Validating catalog configuration: {:?}", file);
            match CatalogConfig::load_from_file(&file).and_then(|c| c.to_catalog()) {
                Ok(catalog) => {
                    println!(
                        "✓ Catalog configuration is valid: {} icons",
                        catalog.len()
                    );
                }
                Err(e) => {
                    error!("Catalog configuration validation failed: {:#}", e);
                    eprintln!("✗ Catalog configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::InitConfig { file } => {
            CatalogConfig::new().save_to_file(&file)?;
            println!("✓ Default catalog configuration written to {}", file.display());
        }
        Commands::Routes { host, path, json } => {
            let routes = routes_for_host(&host);
            match path {
                Some(path) => match match_route(routes, &path) {
                    Some(m) if json => println!("{}", serde_json::to_string_pretty(&m)?),
                    Some(m) => {
                        print!("{}", m.route.view);
                        for (name, value) in &m.params {
                            print!(" {}={}", name, value);
                        }
                        println!();
                    }
                    None => {
                        eprintln!("✗ No route for {} on {}", path, host);
                        std::process::exit(1);
                    }
                },
                None if json => println!("{}", serde_json::to_string_pretty(routes)?),
                None => {
                    for route in routes {
                        println!("{:<8} {}", route.path, route.view);
                    }
                }
            }
        }
        Commands::Name { word, default } => {
            let resolver = load_resolver(cli.config.as_deref())?;
            match resolver.by_name(&word, default) {
                Some(icon) => println!("{}", icon),
                None => {
                    eprintln!("✗ No icon for {:?}", word);
                    std::process::exit(1);
                }
            }
        }
        Commands::Kind { words } => {
            let resolver = load_resolver(cli.config.as_deref())?;
            println!("{}", resolver.by_kind(&words)?);
        }
        Commands::Feature { file } => {
            let resolver = load_resolver(cli.config.as_deref())?;
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read feature from {:?}", file))?;
            let feature: PoiFeature =
                serde_json::from_str(&content).context("Failed to parse feature JSON")?;
            debug!(node_id = feature.node_id, kind = ?feature.kind, "resolving feature icon");
            println!("{}", resolver.icon_for_feature(&feature));
        }
        Commands::Catalog { json } => {
            let resolver = load_resolver(cli.config.as_deref())?;
            let catalog = resolver.catalog();
            if json {
                let map: BTreeMap<&str, &str> = catalog.iter().collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                for (keyword, icon) in catalog.iter() {
                    println!("{:<16} {}", keyword, icon);
                }
            }
        }
    }

    Ok(())
}

/// Resolver over the catalog from `--config`, or the built-in table
fn load_resolver(config: Option<&Path>) -> Result<IconResolver> {
    let catalog = match config {
        Some(path) => {
            info!("Loading icon catalog from {:?}", path);
            CatalogConfig::load_from_file(path)?.to_catalog()?
        }
        None => IconCatalog::builtin(),
    };
    debug!(icons = catalog.len(), "icon catalog ready");
    Ok(IconResolver::new(catalog))
}
