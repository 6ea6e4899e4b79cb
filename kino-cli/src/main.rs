//! kino - terminal front end for the KinoSub subscription service
//!
//! Settings come from the environment (`.env` is loaded first); command
//! line flags override them.

mod command;
mod render;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use kino_client::{Backend, ClientConfig, ViewController};
use tracing::info;

use command::Command;
use terminal::Terminal;

#[derive(Debug, Parser)]
#[command(name = "kino", version, about = "Terminal client for the KinoSub service")]
struct Cli {
    /// API base URL [env: KINO_API_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// Server variant: kinosub or legacy [env: KINO_BACKEND]
    #[arg(long)]
    backend: Option<Backend>,

    /// Request timeout in seconds [env: KINO_TIMEOUT_SECS]
    #[arg(long)]
    timeout: Option<u64>,

    /// Where the session token is kept [env: KINO_TOKEN_FILE]
    #[arg(long)]
    token_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = ClientConfig::from_env()?;
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        if let Some(backend) = self.backend {
            config = config.with_backend(backend);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(token_file) = &self.token_file {
            config = config.with_token_file(token_file);
        }
        Ok(config)
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kino_client=warn,kino_cli=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli.config()?;
    info!(base_url = %config.base_url, backend = %config.backend, "Starting kino");

    let mut controller = ViewController::from_config(&config)?;
    let mut terminal = Terminal::new();

    controller.bootstrap().await;
    println!("{}", render::page(controller.view()));
    println!("Type \"help\" for commands.");

    loop {
        for notice in controller.view_mut().take_notices() {
            println!("{}", render::notice(&notice));
        }

        let Some(line) = terminal.read_line("kino> ") else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        command::run(&mut controller, &mut terminal, command).await;
    }

    info!("Bye");
    Ok(())
}
