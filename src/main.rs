//! Command-line front end for the language routing layer.
//!
//! # Commands
//!
//! ```text
//! lang-router compile --config site.toml --rules rules.json
//!     → compiled routing table as ordered JSON
//!
//! lang-router expand --config site.toml --menu menu.json [--current fr]
//!     → expanded and reconciled menu items as JSON
//!
//! lang-router watch --config site.toml --rules rules.json
//!     → compile, install, recompile on every valid config change
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use url::Url;

use lang_router::config::{load_config, ConfigWatcher, SiteConfig};
use lang_router::menu::{prepare_items, MenuNode, SiteLinks, SwitcherContext};
use lang_router::observability::{logging, metrics};
use lang_router::routing::{RouteTable, RouteTableStore};

#[derive(Parser)]
#[command(name = "lang-router")]
#[command(about = "Language-aware routing tables and menus", long_about = None)]
struct Cli {
    /// Site configuration (TOML).
    #[arg(short, long, global = true, default_value = "site.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a host routing table for the configured languages
    Compile {
        /// Host rules as a JSON object of pattern → target, in match order
        #[arg(short, long)]
        rules: PathBuf,
    },
    /// Expand language switchers in a menu and fix active-state classes
    Expand {
        /// Menu items as a JSON array
        #[arg(short, long)]
        menu: PathBuf,

        /// Slug of the language being rendered
        #[arg(long)]
        current: Option<String>,

        /// Translated URL of the rendered content, as slug=url (repeatable)
        #[arg(long = "translation", value_parser = parse_translation)]
        translations: Vec<(String, String)>,
    },
    /// Keep the compiled table up to date while the config changes
    Watch {
        #[arg(short, long)]
        rules: PathBuf,
    },
}

fn parse_translation(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(slug, url)| (slug.to_string(), url.to_string()))
        .ok_or_else(|| format!("expected slug=url, got '{raw}'"))
}

fn read_rules(path: &Path) -> Result<RouteTable, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_menu(path: &Path) -> Result<Vec<MenuNode>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    if let Err(e) = logging::init_logging(&config.observability) {
        eprintln!("Logging already initialized: {e}");
    }

    tracing::info!(
        config = ?cli.config,
        languages = config.languages.len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Compile { rules } => {
            let host_rules = read_rules(&rules)?;
            let store = RouteTableStore::default();
            let compiled = store.rebuild(&host_rules, &config.languages, &config.routing);
            println!("{}", serde_json::to_string_pretty(&*compiled)?);
        }
        Commands::Expand {
            menu,
            current,
            translations,
        } => {
            let items = read_menu(&menu)?;
            let site_url = Url::parse(&config.site_url)?;
            let links = translations.into_iter().fold(
                SiteLinks::new(&site_url, &config.languages, &config.routing),
                |links, (slug, url)| links.with_translation(slug, url),
            );

            let mut ctx = SwitcherContext::new(&config.languages, &links);
            if let Some(slug) = current.as_deref() {
                ctx = ctx.with_current_language(slug);
            }

            let prepared = prepare_items(&items, &ctx);
            println!("{}", serde_json::to_string_pretty(&prepared)?);
        }
        Commands::Watch { rules } => {
            watch(&cli.config, &rules, config).await?;
        }
    }

    Ok(())
}

async fn watch(
    config_path: &Path,
    rules_path: &Path,
    config: SiteConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let host_rules = read_rules(rules_path)?;
    let store = RouteTableStore::default();
    store.rebuild(&host_rules, &config.languages, &config.routing);

    let (watcher, mut updates) = ConfigWatcher::new(config_path);
    let _watcher = watcher.run()?;

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(new_config) = update else {
                    tracing::warn!("Config watcher stopped");
                    break;
                };
                let compiled = store.rebuild(&host_rules, &new_config.languages, &new_config.routing);
                tracing::info!(rules = compiled.len(), "Routing table reinstalled");
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_after_subcommand() {
        let cli = Cli::try_parse_from(["lang-router", "compile", "--config", "x.toml", "--rules", "r.json"])
            .unwrap();

        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::Compile { rules } if rules == PathBuf::from("r.json")));
    }

    #[test]
    fn test_config_before_subcommand() {
        let cli = Cli::try_parse_from(["lang-router", "-c", "x.toml", "watch", "--rules", "r.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn test_config_defaults_to_site_toml() {
        let cli = Cli::try_parse_from(["lang-router", "expand", "--menu", "menu.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_expand_translations() {
        let cli = Cli::try_parse_from([
            "lang-router",
            "expand",
            "--config",
            "x.toml",
            "--menu",
            "menu.json",
            "--current",
            "fr",
            "--translation",
            "fr=https://example.com/fr/a-propos/",
        ])
        .unwrap();

        let Commands::Expand { current, translations, .. } = cli.command else {
            panic!("expected expand");
        };
        assert_eq!(current.as_deref(), Some("fr"));
        assert_eq!(
            translations,
            vec![("fr".to_string(), "https://example.com/fr/a-propos/".to_string())]
        );
    }

    #[test]
    fn test_bad_translation_rejected() {
        let result = Cli::try_parse_from(["lang-router", "expand", "--menu", "m.json", "--translation", "fr"]);
        assert!(result.is_err());
    }
}
