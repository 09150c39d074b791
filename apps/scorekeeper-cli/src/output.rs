//! Plain-text rendering of a scoreboard.

use scorekeeper::domain::FRAMES_PER_GAME;
use scorekeeper::services::{PlayerScoreboard, Standing};
use scorekeeper::Scoreboard;

const FRAME_HEADER: &str = "Frame";
const TOTAL_LABEL: &str = "Total";
const GAP: usize = 2;

fn badge(standing: Option<Standing>) -> &'static str {
    match standing {
        Some(Standing::Winner) => " (winner)",
        Some(Standing::Leading) => " (leading)",
        None => "",
    }
}

fn total_cell(p: &PlayerScoreboard) -> String {
    format!("{}{}", p.total_score, badge(p.standing))
}

/// One column per player, one row per frame, then a totals row.
pub fn render_table(board: &Scoreboard) -> String {
    let label_width = FRAME_HEADER.len().max(TOTAL_LABEL.len()) + GAP;

    let widths: Vec<usize> = board
        .players
        .iter()
        .map(|p| {
            p.frames
                .iter()
                .map(|l| l.score_input.len())
                .chain([p.player.len(), total_cell(p).len()])
                .max()
                .unwrap_or(0)
                + GAP
        })
        .collect();

    let mut out = String::new();
    let mut row = |label: &str, cells: Vec<String>| {
        let mut line = format!("{label:<label_width$}");
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str(&format!("{cell:<width$}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    };

    row(
        FRAME_HEADER,
        board.players.iter().map(|p| p.player.clone()).collect(),
    );
    for idx in 0..FRAMES_PER_GAME as usize {
        row(
            &(idx + 1).to_string(),
            board
                .players
                .iter()
                .map(|p| {
                    p.frames
                        .get(idx)
                        .map(|l| l.score_input.clone())
                        .unwrap_or_default()
                })
                .collect(),
        );
    }
    row(TOTAL_LABEL, board.players.iter().map(total_cell).collect());

    if board.game_complete {
        out.push_str("Game complete\n");
    }
    out
}
