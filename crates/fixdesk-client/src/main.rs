// crates/fixdesk-client/src/main.rs

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::{io, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fixdesk_client::api::HttpBackend;
use fixdesk_client::app::App;
use fixdesk_client::config::ClientConfig;
use fixdesk_client::dispatcher::{CompletionRx, Dispatcher};
use fixdesk_client::{input, ui};

#[derive(Parser)]
#[clap(name = "fixdesk")]
#[clap(about = "Terminal dashboard for a FIX session and its order blotter")]
struct Cli {
    /// Backend origin, e.g. http://localhost:8080
    #[clap(short, long)]
    backend: Option<String>,

    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Status and order poll interval in milliseconds
    #[clap(long)]
    poll_ms: Option<u64>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    /// Log file (logging is off unless this or --debug is given)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let mut config = ClientConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = cli.backend {
        config.backend_url = url;
    }
    if let Some(ms) = cli.poll_ms {
        config.poll_interval_ms = ms;
    }
    config.validate()?;

    let backend = HttpBackend::new(&config.backend_url, config.request_timeout())?;
    info!(backend = %backend.base_url(), "starting fixdesk");
    let (dispatcher, completions) = Dispatcher::new(Arc::new(backend));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    // Create app and run
    let app = App::new(&config, dispatcher);
    let res = run_app(&mut terminal, app, completions).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(?err, "dashboard exited with error");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    if !cli.debug && cli.log_file.is_none() {
        return Ok(());
    }

    // The terminal belongs to the UI, so logs always go to a file.
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("fixdesk.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let default_directive = if cli.debug {
        "fixdesk=debug,fixdesk_client=debug,fixdesk_core=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut completions: CompletionRx,
) -> Result<()> {
    let (tick_tx, mut ticks) = mpsc::unbounded_channel();
    app.mount(tick_tx);

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(&mut app, key);
            }
        }

        // Apply finished requests, then any due poll
        while let Ok(completion) = completions.try_recv() {
            app.handle_completion(completion);
        }
        let mut poll_due = false;
        while ticks.try_recv().is_ok() {
            poll_due = true;
        }
        if poll_due {
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }

    app.unmount();
    Ok(())
}
