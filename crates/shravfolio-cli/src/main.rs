mod app_state;
mod tui;
mod ui;

use clap::{Parser, Subcommand};
use shravfolio_assistant::offline_reply;
use shravfolio_sdk::{load_catalog, AppConfig, Catalog, GeminiClient};
use tracing::{debug, info};

use crate::app_state::AppController;
use crate::tui::{EventHandler, Tui};
use crate::ui::PortfolioApp;

const TICK_RATE_MS: u64 = 250;

#[derive(Parser, Debug)]
#[command(name = "shravfolio")]
#[command(about = "Shravfolio terminal portfolio")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Skip network calls and use the static fallback projects
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guided assistant with project and skill-graph tabs (default)
    Assistant,
    /// Load the project catalog and print it
    Projects {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer a question from the offline FAQ
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Repository analyser for the catalog, if a key is configured.
fn analyzer(config: &AppConfig) -> Option<GeminiClient> {
    match config.gemini_client() {
        Ok(client) => Some(client),
        Err(e) => {
            debug!(error = %e, "no repository analyser");
            None
        }
    }
}

async fn load(config: &AppConfig, offline: bool) -> Catalog {
    if offline {
        return Catalog::offline();
    }
    let gemini = analyzer(config);
    load_catalog(&config.github_client(), gemini.as_ref(), &config.github_username).await
}

async fn run_tui(catalog: Catalog) -> anyhow::Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(TICK_RATE_MS);
    let mut app = PortfolioApp::new(catalog, events.get_sender());

    let result = event_loop(&mut terminal, &mut events, &mut app).await;
    tui::restore()?;
    result
}

async fn event_loop(
    terminal: &mut Tui,
    events: &mut EventHandler,
    app: &mut impl AppController,
) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;
        match events.next_async().await {
            Some(action) => app.update(action),
            None => break,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command.unwrap_or(Commands::Assistant) {
        Commands::Assistant => {
            eprintln!("Loading projects...");
            let catalog = load(&config, cli.offline).await;
            run_tui(catalog).await?;
        }
        Commands::Projects { json } => {
            init_logging();
            let catalog = load(&config, cli.offline).await;
            for line in &catalog.log {
                info!(target: "catalog", "{line}");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("{} projects ({})", catalog.projects.len(), catalog.source);
                for p in &catalog.projects {
                    println!("{:<6}{:<20}{}", p.year, p.category.to_string(), p.title);
                }
            }
        }
        Commands::Ask { question } => {
            init_logging();
            let reply = offline_reply(&question.join(" "));
            debug!(intent = %reply.matched_intent, "faq reply");
            println!("{}", reply.reply);
            if !reply.suggestions.is_empty() {
                println!("\nYou could also ask:");
                for suggestion in &reply.suggestions {
                    println!("  - {suggestion}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_assistant() {
        let cli = Cli::parse_from(["shravfolio"]);
        assert!(cli.command.is_none());
        assert!(!cli.offline);
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::parse_from(["shravfolio", "ask", "what", "is", "immigame"]);
        match cli.command {
            Some(Commands::Ask { question }) => assert_eq!(question.join(" "), "what is immigame"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn offline_is_global() {
        let cli = Cli::parse_from(["shravfolio", "projects", "--json", "--offline"]);
        assert!(cli.offline);
        assert!(matches!(cli.command, Some(Commands::Projects { json: true })));
    }

    #[tokio::test]
    async fn offline_load_is_fallback() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(load(&config, true).await, Catalog::offline());
    }

    #[test]
    fn analyser_accepts_every_key_alias() {
        for name in shravfolio_sdk::config::GEMINI_KEY_VARS {
            let config = AppConfig::from_lookup(|var| (var == name).then(|| "k".to_string()));
            assert!(analyzer(&config).is_some(), "{name}");
        }
        assert!(analyzer(&AppConfig::from_lookup(|_| None)).is_none());
    }

    #[test]
    fn analyser_uses_configured_model() {
        let config = AppConfig::from_lookup(|var| match var {
            "API_KEY" => Some("k".to_string()),
            "GEMINI_MODEL" => Some("gemini-test".to_string()),
            _ => None,
        });
        assert_eq!(analyzer(&config).unwrap().model(), "gemini-test");
    }
}
