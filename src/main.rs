mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::{Config, ProviderKind};
use controller::AppController;
use model::{AppModel, CatalogProvider, HttpRecommendationClient, RecommendationProvider};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    if let Err(e) = logging::init_logging(&config.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== lyricfinder starting ===");

    let provider = build_provider(&config)?;
    tracing::info!(provider = provider.name(), "Recommendation provider ready");

    let model = Arc::new(Mutex::new(AppModel::new()));
    let controller = AppController::new(model.clone(), provider);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("lyricfinder shutting down");
    Ok(())
}

fn build_provider(config: &Config) -> Result<Arc<dyn RecommendationProvider>> {
    let provider: Arc<dyn RecommendationProvider> = match config.provider {
        ProviderKind::Remote => {
            tracing::debug!(endpoint = %config.endpoint, timeout = ?config.timeout(), "Using recommendation service");
            Arc::new(HttpRecommendationClient::new(&config.endpoint, config.timeout())?)
        }
        ProviderKind::Catalog => {
            tracing::debug!(delay = ?config.catalog_delay(), "Using built-in catalog");
            Arc::new(CatalogProvider::new(config.catalog_delay()))
        }
    };
    Ok(provider)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> Result<()> {
    loop {
        let (ui_state, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_ui_state().await,
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &ui_state);
        })?;

        // Short poll so finished searches show up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
