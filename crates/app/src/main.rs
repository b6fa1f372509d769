use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use earcheck_core::tuning::TestTuning;
use services::audio::{AudioPlayer, NullAudio};
use services::{Clock, ProfileService, ResultService, ScreeningService};
use storage::repository::SessionStore;
use ui::{App, UiApp, build_app_context};

mod audio;

use audio::RodioPlayer;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
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

fn parse_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.parse().map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --volume-exponent <n>   volume ramp curve exponent (default 3)");
    eprintln!("  --score-exponent <n>    score falloff curve exponent (default 2)");
    eprintln!("  --tiers <3|5>           result tier count (default 5)");
    eprintln!("  --duration-ms <n>       per-stage test duration (default 30000)");
    eprintln!("  --sounds-dir <path>     stage sound directory (default assets/sounds)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EARCHECK_SOUNDS_DIR");
}

struct Args {
    tuning: TestTuning,
    sounds_dir: PathBuf,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, Box<dyn std::error::Error>> {
        let defaults = TestTuning::default();
        let mut volume_exponent = defaults.volume_exponent();
        let mut score_exponent = defaults.score_exponent();
        let mut tier_count = defaults.tier_count();
        let mut duration_ms = defaults.test_duration_ms();
        let mut sounds_dir = std::env::var("EARCHECK_SOUNDS_DIR")
            .map_or_else(|_| PathBuf::from("assets/sounds"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--volume-exponent" => {
                    volume_exponent = parse_number(args, "--volume-exponent")?;
                }
                "--score-exponent" => {
                    score_exponent = parse_number(args, "--score-exponent")?;
                }
                "--tiers" => {
                    tier_count = parse_number(args, "--tiers")?;
                }
                "--duration-ms" => {
                    duration_ms = parse_number(args, "--duration-ms")?;
                }
                "--sounds-dir" => {
                    sounds_dir = PathBuf::from(require_value(args, "--sounds-dir")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg).into()),
            }
        }

        let tuning = TestTuning::new(volume_exponent, score_exponent, tier_count, duration_ms)?;
        Ok(Self { tuning, sounds_dir })
    }
}

struct DesktopApp {
    screening: Arc<ScreeningService>,
    results: Arc<ResultService>,
    profile: Arc<ProfileService>,
    audio: Arc<dyn AudioPlayer>,
}

impl UiApp for DesktopApp {
    fn screening(&self) -> Arc<ScreeningService> {
        Arc::clone(&self.screening)
    }

    fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    fn audio(&self) -> Arc<dyn AudioPlayer> {
        Arc::clone(&self.audio)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let parsed = Args::parse(&mut args).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    info!(
        tiers = parsed.tuning.tier_count(),
        duration_ms = parsed.tuning.test_duration_ms(),
        "starting hearing screening"
    );

    let clock = Clock::default_clock();
    let store = SessionStore::in_memory();
    let screening = Arc::new(ScreeningService::new(clock, store.clone(), parsed.tuning));
    let results = Arc::new(ResultService::new(store.clone(), parsed.tuning));
    let profile = Arc::new(ProfileService::new(store));

    let audio: Arc<dyn AudioPlayer> = match RodioPlayer::start(parsed.sounds_dir) {
        Some(player) => Arc::new(player),
        None => {
            warn!("audio unavailable, running the screening silently");
            Arc::new(NullAudio)
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        screening,
        results,
        profile,
        audio,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EarCheck")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
