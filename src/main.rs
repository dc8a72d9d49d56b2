use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use markov_dice::driver::{process_input, tick_driver};
use markov_dice::input::{map_key, AppAction};
use markov_dice::{build_info, logging, ui};
use markov_dice::{AppConfig, AppError, Driver, Speed, HISTORY_WINDOW, INPUT_POLL_MS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Dice Markov chain visualizer: running sum of die rolls modulo 7
#[derive(Parser, Debug)]
#[command(name = "markov-dice")]
#[command(version = build_info::BUILD_VERSION)]
#[command(about = "Roll a die, track the running sum mod 7, watch the states even out")]
struct Args {
    /// Roll interval in milliseconds (100, 300, 500 or 1000)
    #[arg(long, default_value = "500", value_parser = parse_speed)]
    speed: Speed,

    /// Number of recent steps shown in the history chart
    #[arg(short, long, default_value_t = HISTORY_WINDOW)]
    window: usize,

    /// RNG seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter for ~/.markov_dice/markov_dice.log
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_speed(s: &str) -> Result<Speed, String> {
    let ms: u64 = s.parse().map_err(|e| format!("{}: {}", s, e))?;
    Speed::from_interval_ms(ms).map_err(|e| e.to_string())
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            speed: args.speed,
            history_window: args.window.max(1),
            seed: args.seed,
            log_level: args.log_level,
        }
    }
}

fn main() -> Result<(), AppError> {
    let config = AppConfig::from(Args::parse());

    match logging::init_file_logging(&config.log_level) {
        Ok(path) => info!(
            version = build_info::BUILD_VERSION,
            log = %path.display(),
            "markov-dice starting"
        ),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Cleanup terminal before reporting anything
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(rolls) => {
            info!(rolls, "markov-dice exiting");
            println!("Goodbye! {} rolls simulated.", rolls);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "markov-dice aborted");
            Err(e)
        }
    }
}

/// Draw/poll/tick loop. Returns the number of rolls at exit.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &AppConfig,
) -> Result<u64, AppError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut driver = Driver::new(config.speed);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &driver, config.history_window))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match map_key(key_event) {
                    AppAction::Quit => break,
                    AppAction::Driver(input) => {
                        process_input(&mut driver, input, &mut rng);
                    }
                }
            }
        }

        // Feed whole elapsed milliseconds, carrying the remainder
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(dt_ms);
        tick_driver(&mut driver, dt_ms, &mut rng);
    }

    Ok(driver.engine.roll_count())
}
