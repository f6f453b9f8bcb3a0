use clap::{Parser, Subcommand};
use lib::dispatch::{MessageDispatcher, CAMERA_SURFACE_ID};
use lib::sink::ConsoleSink;
use lib::surfaces::{CameraSurface, Surface, SurfaceRegistry};
use lib::window::RobotWindow;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ringside")]
#[command(about = "Ringside robot window", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Create the configuration directory and default config file.
    Init {
        /// Config file path (default: RINGSIDE_CONFIG_PATH or ~/.ringside/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,
    },

    /// Attach the window and deliver messages read from stdin, one per line.
    /// Lines of the form "robot<TAB>message" carry their robot; other lines use the default robot.
    Watch {
        /// Config file path (default: RINGSIDE_CONFIG_PATH or ~/.ringside/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<std::path::PathBuf>,

        /// Robot name for lines that do not carry one (default from config or "nao")
        #[arg(long, value_name = "NAME")]
        robot: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Version) => {
            println!("ringside {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Init { config }) => {
            if let Err(e) = run_init(config) {
                log::error!("init failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Watch { config, robot }) => {
            if let Err(e) = run_watch(config, robot).await {
                log::error!("watch failed: {}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("Run with --help for usage");
        }
    }
}

fn run_init(config_path: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let path = config_path.unwrap_or_else(lib::config::default_config_path);
    let _dir = lib::init::init_config_dir(&path)?;
    println!(
        "initialized configuration at {}",
        path.parent()
            .unwrap_or(std::path::Path::new("."))
            .display()
    );
    Ok(())
}

async fn run_watch(
    config_path: Option<std::path::PathBuf>,
    robot: Option<String>,
) -> anyhow::Result<()> {
    use std::io;

    let (config, _path) = lib::config::load_config(config_path)?;
    let default_robot = robot.unwrap_or_else(|| lib::config::resolve_default_robot(&config));

    let surfaces = Arc::new(SurfaceRegistry::new());
    let camera = Arc::new(CameraSurface::new(CAMERA_SURFACE_ID));
    surfaces
        .register(camera.id().to_string(), camera.clone())
        .await;
    let dispatcher = Arc::new(MessageDispatcher::new(surfaces, Arc::new(ConsoleSink)));
    let window = RobotWindow::new();
    window.set_receive(dispatcher).await;
    log::info!(
        "window attached; reading messages from stdin (robot<TAB>message), default robot '{}'",
        default_robot
    );

    let stdin = io::stdin();
    loop {
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        let (robot, message) = match line.split_once('\t') {
            Some((r, m)) => (r, m),
            None => (default_robot.as_str(), line),
        };
        window.receive(message, robot).await;
    }

    let frames = camera.frame_count().await;
    if frames > 0 {
        match camera.source().await.as_deref().map(lib::frames::DataUri::parse) {
            Some(Ok(uri)) => log::info!(
                "{} camera frame(s) received; last was {} ({} bytes)",
                frames,
                uri.media_type,
                uri.payload.len()
            ),
            _ => log::info!("{} camera frame(s) received", frames),
        }
    }
    Ok(())
}
