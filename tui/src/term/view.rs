//! Screen layouts: maps menu and board state into a framebuffer.
//!
//! Pure code, no terminal I/O.

use saper_core::{Cell, CellState};

use super::fb::{FrameBuffer, Rgb, Style};
use crate::menu::MenuState;
use crate::session::Session;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub const GAME_HELP: &str = "STEROWANIE | Strzałki: poruszanie | Spacja: odkryj | F: flaga | Q: wyjście";
pub const MENU_TITLE: &str = "SAPER";
pub const MENU_HELP: &str = "ENTER – start | Q – wyjście";

/// First terminal row of the board.
const BOARD_TOP: u16 = 2;
/// Terminal columns per board cell: `[c]` or ` c `.
const CELL_W: u16 = 3;

const HIDDEN: Style = Style::fg(Rgb::new(150, 150, 160));
const FLAG: Style = Style::fg(Rgb::new(240, 200, 40)).bold();
const MINE: Style = Style::fg(Rgb::new(235, 60, 60)).bold();
const WON: Style = Style::fg(Rgb::new(90, 220, 110)).bold();
const TEXT: Style = Style::fg(Rgb::new(220, 220, 220));

fn number_style(count: u8) -> Style {
    let fg = match count {
        1 => Rgb::new(90, 140, 255),
        2 => Rgb::new(80, 200, 100),
        3 => Rgb::new(235, 80, 80),
        4 => Rgb::new(150, 90, 230),
        5 => Rgb::new(200, 120, 40),
        6 => Rgb::new(40, 200, 200),
        _ => Rgb::new(230, 230, 230),
    };
    Style::fg(fg).bold()
}

/// Character and style for one board cell as the player sees it.
pub fn cell_glyph(cell: Cell) -> (char, Style) {
    match cell.state() {
        CellState::Hidden => ('■', HIDDEN),
        CellState::Flagged => ('⚑', FLAG),
        CellState::Revealed if cell.is_mine() => ('*', MINE),
        CellState::Revealed => match cell.adjacent_mines() {
            0 => (' ', TEXT),
            count => (char::from(b'0' + count), number_style(count)),
        },
    }
}

pub fn render_menu(menu: &MenuState, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear();

    let mid_y = viewport.height / 2;
    let mid_x = viewport.width / 2;

    fb.put_str(mid_x.saturating_sub(3), mid_y.saturating_sub(3), MENU_TITLE, TEXT.bold());
    for (i, preset) in menu.presets().iter().enumerate() {
        let selected = i == menu.selected();
        let marker = if selected { '>' } else { ' ' };
        let line = format!("{} {} x {}", marker, preset.size, preset.size);
        let style = if selected { TEXT.bold() } else { TEXT };
        fb.put_str(mid_x.saturating_sub(7), mid_y + i as u16, &line, style);
    }
    fb.put_str(mid_x.saturating_sub(10), mid_y + 4, MENU_HELP, HIDDEN);
}

pub fn render_game(session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear();

    let board = session.board();
    let cursor = session.cursor();
    fb.put_str(0, 0, GAME_HELP, TEXT);

    for ((y, x), cell) in board.iter_cells() {
        let (ch, style) = cell_glyph(cell);
        let sy = BOARD_TOP + u16::from(y);
        let sx = u16::from(x) * CELL_W;
        let (open, close) = if (y, x) == cursor { ('[', ']') } else { (' ', ' ') };
        fb.put_str(sx, sy, &open.to_string(), TEXT.bold());
        fb.put_str(sx + 1, sy, &ch.to_string(), style);
        fb.put_str(sx + 2, sy, &close.to_string(), TEXT.bold());
    }

    let below = BOARD_TOP + u16::from(board.size());
    if board.is_game_over() {
        let (msg, style) = if board.is_won() {
            ("WYGRANA!", WON)
        } else {
            ("PRZEGRANA!", MINE)
        };
        fb.put_str(0, below, &format!("{msg} | R: jeszcze raz | Q: menu"), style);
    }
    fb.put_str(0, below + 1, &format!("Miny: {}", board.mines_left()), HIDDEN);
}
