use std::io::{StdoutLock, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use huename::action::ActionHandler;
use huename::cli::{self, Cli, Command};
use huename::tui::Terminal;
use huename::{logging, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui { image: None }) {
        Command::Tui { image } => run_tui(image).await?,
        Command::Classify {
            red,
            green,
            blue,
            distance,
        } => print_with(|out| cli::classify(out, &red, &green, &blue, distance))?,
        Command::Pick {
            image,
            x,
            y,
            distance,
        } => print_with(|out| cli::pick(out, &image, x, y, distance))?,
        Command::Palette => print_with(|out| cli::palette(out))?,
    }

    Ok(())
}

/// Run a one-shot command that writes to stdout
fn print_with<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut StdoutLock<'static>) -> huename::Result<()>,
{
    logging::init_stderr();
    let mut out = std::io::stdout().lock();
    f(&mut out)?;
    out.flush()?;
    Ok(())
}

async fn run_tui(image: Option<PathBuf>) -> Result<()> {
    if let Some(path) = logging::init_file() {
        tracing::info!("Logging to {}", path.display());
    }

    let config = Config::load()?;
    let mut app = App::new(config);

    if let Some(path) = image {
        ActionHandler::load_picture(&mut app, path).await?;
    }

    let terminal = Terminal::new()?;
    app.run(terminal).await?;

    Ok(())
}
