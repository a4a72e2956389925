use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, ExportService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    export_service: Arc<ExportService>,
}

impl UiApp for DesktopApp {
    fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

struct Args {
    out_dir: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--out-dir <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --out-dir  the platform download directory, else the current directory");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DEEPDIVE_OUT_DIR");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut out_dir = std::env::var_os("DEEPDIVE_OUT_DIR").map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out-dir" => {
                    let value = require_value(args, "--out-dir")?;
                    out_dir = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            out_dir: out_dir.unwrap_or_else(default_out_dir),
        })
    }
}

fn default_out_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Make sure exports have somewhere to land before the window opens.
    std::fs::create_dir_all(&args.out_dir)?;
    log::info!("exports will be saved to {}", args.out_dir.display());

    let export_service = Arc::new(ExportService::new(Clock::default_clock(), args.out_dir));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { export_service });
    let context = build_app_context(&app);

    // Explicitly disable always-on-top so the app doesn't behave like a
    // modal window in dev setups where that is the default.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Deep Dive")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
