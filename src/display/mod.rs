//! Rendering layer. All terminal I/O lives here.
//!
//! The engine draws itself through the `Surface` trait; `TerminalSurface`
//! scales its playfield pixels onto the terminal grid.  The frame chrome
//! (border, lanes, HUD, hints, game-over panel) is drawn around it.  No game
//! logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use fruit_catch::config::LANE_COUNT;
use fruit_catch::entities::{FallingObject, GameResult, Lane, ObjectKind, BASKET_ICON};
use fruit_catch::{GameEngine, RollSource, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_LANE: Color = Color::DarkGrey;
const C_TEXT: Color = Color::White;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LANE: Color = Color::Cyan;
const C_FRUIT: Color = Color::Green;
const C_BOMB: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Terminal size in cells.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    // Play area sits inside the border: rows 2 .. height-2, cols 1 .. width-1.
    fn inner_cols(self) -> u16 {
        self.width.saturating_sub(2)
    }

    fn inner_rows(self) -> u16 {
        self.height.saturating_sub(4)
    }
}

// ── Surface implementation ────────────────────────────────────────────────────

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    view: Viewport,
    field_width: f64,
    field_height: f64,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, view: Viewport, field_width: f64, field_height: f64) -> Self {
        Self {
            out,
            view,
            field_width,
            field_height,
        }
    }

    /// Map a playfield pixel to a cell inside the border, or `None` when it
    /// falls outside the visible area.
    fn cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x >= self.field_width || y >= self.field_height {
            return None;
        }
        let col = (x / self.field_width * self.view.inner_cols() as f64) as u16;
        let row = (y / self.field_height * self.view.inner_rows() as f64) as u16;
        Some((1 + col, 2 + row))
    }

    /// Print a two-column glyph centred on the cell for (`x`, `y`).
    fn put_icon(&mut self, icon: &str, color: Color, x: f64, y: f64) -> std::io::Result<()> {
        if let Some((col, row)) = self.cell(x, y) {
            let col = col.saturating_sub(1).max(1);
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(color))?;
            self.out.queue(Print(icon))?;
        }
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    type Error = std::io::Error;

    fn draw_basket(&mut self, _lane: Lane, x: f64, y: f64) -> std::io::Result<()> {
        self.put_icon(BASKET_ICON, C_TEXT, x, y)
    }

    fn draw_object(&mut self, object: &FallingObject) -> std::io::Result<()> {
        let color = match object.kind {
            ObjectKind::Fruit(_) => C_FRUIT,
            ObjectKind::Bomb => C_BOMB,
        };
        self.put_icon(object.icon(), color, object.x, object.y)
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> std::io::Result<()> {
        if let Some((col, row)) = self.cell(x, y) {
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(C_TEXT))?;
            self.out.queue(Print(text))?;
        }
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `last_result` is the outcome of the session
/// that just ended, shown over the empty playfield.
pub fn render<W: Write, S: RollSource>(
    out: &mut W,
    engine: &GameEngine<S>,
    view: Viewport,
    last_result: Option<GameResult>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_lanes(out, view)?;
    draw_hud(out, engine, view)?;

    let config = engine.config();
    let mut surface = TerminalSurface::new(out, view, config.game_width, config.game_height);
    engine.draw(&mut surface)?;

    draw_controls_hint(out, view)?;

    if let Some(result) = last_result {
        draw_game_over(out, view, result)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Lane dividers ─────────────────────────────────────────────────────────────

fn draw_lanes<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let inner = view.inner_cols();
    out.queue(style::SetForegroundColor(C_LANE))?;
    for divider in 1..LANE_COUNT as u16 {
        let col = 1 + inner * divider / LANE_COUNT as u16;
        for row in (2..view.height.saturating_sub(2)).step_by(2) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("┆"))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write, S: RollSource>(
    out: &mut W,
    engine: &GameEngine<S>,
    view: Viewport,
) -> std::io::Result<()> {
    // Basket lane, left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LANE))?;
    out.queue(Print(format!("Lane: {:<6}", engine.basket_lane().label())))?;

    // Lives, right
    let hearts: String = "♥".repeat(engine.lives() as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = view
        .width
        .saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← ↓ → / A S D : Lane   Q : End game"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: Viewport, result: GameResult) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", result.score);
    let level_line = format!("Final Level: {}", result.level);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        (&level_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
