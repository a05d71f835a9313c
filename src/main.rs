//! Rubberduck - today's scratch note, one command away.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rubberduck::config::Config;
use rubberduck::console::Console;
use rubberduck::editor::Editor;
use rubberduck::scratch::ScratchDir;
use rubberduck::Error;

#[derive(Parser)]
#[command(name = "rubberduck")]
#[command(about = "Open today's scratch note, carrying over yesterday's")]
#[command(version)]
struct Cli {}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rubberduck=warn")),
        )
        .init();

    let Cli {} = Cli::parse();
    let console = Console::new();

    if let Err(e) = run(&console) {
        console.fatal(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(console: &Console) -> Result<(), Error> {
    let config = Config::from_env()?;
    let today = chrono::Local::now().date_naive();
    info!(dir = %config.scratch_dir.display(), %today, "Preparing scratch file");

    let prepared = ScratchDir::new(&config.scratch_dir).prepare(today, console)?;
    Editor::new(config.editor).open(prepared.path())
}
