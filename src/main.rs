use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use pong::config::{self, Config};
use pong::debug;
use pong::game::{ControlFlow, GameController};
use pong::terminal_input::KeyTracker;
use pong::ui::{self, Palette};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    debug: bool,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pong");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage(program);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    debug::init(options.debug)?;

    let mut config = config::load_config(options.config_path.as_deref())?;
    if let Some(seed) = options.seed {
        config.game.seed = Some(seed);
    }

    // Release events are only reported when the terminal supports the kitty protocol
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    info!(reports_release, "starting terminal");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, reports_release);

    // Restore terminal
    if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;

    result
}

/// Parse arguments after the program name; `Ok(None)` means help was requested
fn parse_args(args: &[String]) -> anyhow::Result<Option<CliOptions>> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--config" | "-c" => {
                let path = iter.next().context("--config requires a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--seed" | "-s" => {
                let value = iter.next().context("--seed requires a number")?;
                let seed = value
                    .parse()
                    .with_context(|| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--help" | "-h" => return Ok(None),
            other => anyhow::bail!("unknown argument: {}", other),
        }
    }

    Ok(Some(options))
}

fn print_usage(program: &str) {
    println!("Pong - Terminal Pong with AI opponents and doubles");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  -d, --debug           Log to {}", debug::LOG_FILE_PATH);
    println!("  -c, --config <path>   Read configuration from <path>");
    println!(
        "                        (default: {})",
        config::get_config_path().display()
    );
    println!("  -s, --seed <n>        Seed the random generator");
    println!("  -h, --help            Show this message");
    println!();
    println!("Controls:");
    println!("  Menu: Space/Tab change mode, Enter start, Q/Esc quit");
    println!("  Player 1: W/S (A/D in doubles)   Player 2: arrow keys");
}

/// Fixed-timestep frame loop; returns when the player quits
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
    reports_release: bool,
) -> anyhow::Result<()> {
    let frame_duration = Duration::from_secs_f64(1.0 / config.display.target_fps as f64);
    let timestep = config.fixed_timestep();
    let palette = Palette::from(&config.display);

    let mut controller = GameController::new(config);
    let mut keys = KeyTracker::new(reports_release);

    loop {
        let frame_start = Instant::now();

        let input = keys.poll()?;
        if controller.handle_input(&input) == ControlFlow::Quit {
            return Ok(());
        }

        let snapshot = controller.tick(timestep);
        terminal.draw(|f| ui::render(f, &snapshot, &palette))?;

        limit_frame_rate(frame_start, frame_duration);
    }
}

/// Sleep out whatever is left of the frame
fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}
