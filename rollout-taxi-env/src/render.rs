//! Text rendering of the taxi world with ANSI colors.
use crate::{
    map::{LOCS, MAP},
    state::IN_TAXI,
    TaxiAct, TaxiState,
};

/// Terminal colors used in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Code 32.
    Green,
    /// Code 33.
    Yellow,
    /// Code 34.
    Blue,
    /// Code 35.
    Magenta,
}

impl Color {
    fn code(&self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
        }
    }
}

/// Wraps `s` in an ANSI escape sequence.
///
/// `highlight` colors the background instead of the foreground.
pub fn colorize(s: &str, color: Color, bold: bool, highlight: bool) -> String {
    let mut code = color.code();
    if highlight {
        code += 10;
    }
    let attrs = if bold {
        format!("{};1", code)
    } else {
        code.to_string()
    };
    format!("\x1b[{}m{}\x1b[0m", attrs, s)
}

/// Renders a frame: the map with the taxi, passenger and destination marked,
/// followed by the last action in parentheses, or an empty line after a reset.
pub fn frame(state: &TaxiState, last_action: Option<TaxiAct>) -> String {
    let mut out = MAP
        .iter()
        .map(|line| line.chars().map(String::from).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let taxi = &mut out[1 + state.taxi_row][2 * state.taxi_col + 1];
    if state.pass_loc < IN_TAXI {
        *taxi = colorize(taxi, Color::Yellow, false, true);
        let (pi, pj) = LOCS[state.pass_loc];
        let pass = &mut out[1 + pi][2 * pj + 1];
        *pass = colorize(pass, Color::Blue, true, false);
    } else {
        let cell = if taxi.as_str() == " " { "_" } else { taxi.as_str() };
        *taxi = colorize(cell, Color::Green, false, true);
    }

    let (di, dj) = LOCS[state.dest];
    let dest = &mut out[1 + di][2 * dj + 1];
    *dest = colorize(dest, Color::Magenta, false, false);

    let mut frame = out
        .iter()
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n");
    frame.push('\n');
    match last_action {
        Some(a) => frame.push_str(&format!("  ({})\n", a.name())),
        None => frame.push('\n'),
    }
    frame
}
