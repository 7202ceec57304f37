use clap::{Parser, Subcommand};
use relm4::prelude::*;
use ringstat::{CategorySeries, RenderMode, StatsView, config};
use ringstat_gtk::gui::app::AppModel;
use ringstat_gtk::sys::runtime;
use ringstat_gtk::sys::server::SOCKET_PATH;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ringstat", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read this config file instead of the default location
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Override the configured render mode (sync, seq, mirror or 0-2)
    #[arg(short = 'm', long)]
    mode: Option<RenderMode>,

    /// Series to show on startup, e.g. "1,0,1"
    #[arg(short = 'd', long)]
    data: Option<CategorySeries>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Send a new series to a running ringstat window
    Push { series: CategorySeries },
    /// Write the default config file and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Push { series }) => send_series(&series),
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => {
            run_window(cli.config, cli.mode, cli.data);
            Ok(())
        }
    }
}

fn run_window(path: Option<PathBuf>, mode: Option<RenderMode>, data: Option<CategorySeries>) {
    let mut config = config::load_or_default(path.as_deref());
    if let Some(mode) = mode {
        config.render_mode = mode;
    }
    log::info!("Rendering in {} mode", config.render_mode);

    let view = StatsView::new(&config);
    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    // clap owns the command line, keep GTK from parsing it again
    let app = RelmApp::new("org.ringstat.viewer").with_args(Vec::new());

    app.run::<AppModel>((view, data, rx));
}

fn send_series(series: &CategorySeries) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to ringstat at {}: {}. Is it running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "data {}", series)?;
    Ok(())
}
