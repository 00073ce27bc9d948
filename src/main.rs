mod display;

use std::cell::RefCell;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use log::{debug, info};

use fruit_catch::entities::{FruitTier, ObjectKind};
use fruit_catch::{EngineConfig, GameEngine, GameResult, RollSource};

use display::Viewport;

const DEFAULT_CONFIG_PATH: &str = "./fruit_catch.ini";

/// Catch falling fruit by moving the basket between three lanes.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI file overriding the engine constants (default: ./fruit_catch.ini if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for a reproducible spawn sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            EngineConfig::load_from_file(DEFAULT_CONFIG_PATH)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Stand-in for the pose classifier: keys produce the same labels the
/// stabilized classifier would.
fn lane_label(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('1') => {
            Some("LEFT")
        }
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('2') => Some("CENTER"),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('3') => {
            Some("RIGHT")
        }
        _ => None,
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "🧺  FRUIT  CATCH  🧺";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy.saturating_sub(4)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Catch the fruit, dodge the bombs!"))?;

    let legend = [
        ObjectKind::Fruit(FruitTier::Apple),
        ObjectKind::Fruit(FruitTier::Orange),
        ObjectKind::Fruit(FruitTier::Grape),
        ObjectKind::Bomb,
    ];
    for (i, kind) in legend.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16;
        let color = if kind.is_bomb() { Color::Red } else { Color::Green };
        out.queue(cursor::MoveTo(cx.saturating_sub(12), row))?;
        out.queue(Print(kind.icon()))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!("  {:+} points", kind.score_value())))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 3))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("Every 1000 points is a new level."))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(12), cy + 5))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("SPACE : Start   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Char(' ') | KeyCode::Enter => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            // Input thread is gone; nothing can start a game any more
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Lane keys are applied as soon as they are drained from the channel, so the
/// next `update` always sees the latest lane.  Q ends a running session
/// through `stop()`, which reports the result via the game-end observer.  On
/// the game-over panel Q quits and ESC returns to the menu.
fn game_loop<W: Write, S: RollSource>(
    out: &mut W,
    engine: &mut GameEngine<S>,
    last_result: &RefCell<Option<GameResult>>,
    rx: &mpsc::Receiver<Event>,
    clock: Instant,
    frame: Duration,
) -> std::io::Result<bool> {
    last_result.borrow_mut().take();
    engine.start();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) = event
            else {
                continue;
            };
            match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    engine.stop();
                    return Ok(true);
                }
                KeyCode::Char('q') | KeyCode::Char('Q') if !engine.is_active() => {
                    return Ok(true);
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    if engine.is_active() {
                        engine.stop();
                    } else {
                        return Ok(false);
                    }
                }
                KeyCode::Char('r') | KeyCode::Char('R') if !engine.is_active() => {
                    last_result.borrow_mut().take();
                    engine.start();
                }
                code => {
                    if let Some(label) = lane_label(code) {
                        engine.set_basket_lane(label);
                    }
                }
            }
        }

        let now_ms = clock.elapsed().as_secs_f64() * 1000.0;
        engine.update(now_ms);

        let result = *last_result.borrow();
        display::render(out, engine, Viewport::current()?, result)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config(cli.config.as_deref())?;
    let mut engine = match cli.seed {
        Some(seed) => GameEngine::seeded(config, seed)?,
        None => GameEngine::new(config)?,
    };

    let last_result: Rc<RefCell<Option<GameResult>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&last_result);
    engine.set_game_end_callback(move |result| {
        info!("Final score {} at level {}", result.score, result.level);
        *slot.borrow_mut() = Some(result);
    });
    engine.set_score_change_callback(|change| {
        debug!(
            "Score: {}, Level: {}, Lives: {}",
            change.score, change.level, change.lives
        );
    });

    let frame = Duration::from_secs_f64(1.0 / cli.fps.max(1) as f64);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &mut engine, &last_result, &rx, frame);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    Ok(result?)
}

fn run<W: Write, S: RollSource>(
    out: &mut W,
    engine: &mut GameEngine<S>,
    last_result: &RefCell<Option<GameResult>>,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<()> {
    let clock = Instant::now();

    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                if game_loop(out, engine, last_result, rx, clock, frame)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
