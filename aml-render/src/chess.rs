//! Chess boards from FEN strings
//!
//! Used for `{{pgn: <fen>}}` templates. Only the piece placement field is validated; the side
//! to move is read from the second field (`w` is white, anything else black). Everything else
//! in the FEN (castling, en passant, clocks) is shown verbatim in the raw-FEN toggle.

use crate::escape::escape_html;
use std::fmt::Write;
use thiserror::Error;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must have 8 ranks")]
    RankCount(usize),
    #[error("Each rank must have 8 squares")]
    RankLength { rank: usize, squares: usize },
    #[error("Invalid character in FEN: '{0}'")]
    InvalidCharacter(char),
}

/// Check the placement field of a FEN string.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (index, rank) in ranks.iter().enumerate() {
        let mut squares = 0;
        for c in rank.chars() {
            squares += match c {
                '1'..='8' => c as usize - '0' as usize,
                'k' | 'q' | 'r' | 'b' | 'n' | 'p' | 'K' | 'Q' | 'R' | 'B' | 'N' | 'P' => 1,
                other => return Err(FenError::InvalidCharacter(other)),
            };
        }
        if squares != 8 {
            return Err(FenError::RankLength {
                rank: 8 - index,
                squares,
            });
        }
    }

    Ok(())
}

fn glyph(piece: char) -> Option<&'static str> {
    let glyph = match piece {
        'K' => "♔",
        'Q' => "♕",
        'R' => "♖",
        'B' => "♗",
        'N' => "♘",
        'P' => "♙",
        'k' => "♚",
        'q' => "♛",
        'r' => "♜",
        'b' => "♝",
        'n' => "♞",
        'p' => "♟",
        _ => return None,
    };
    Some(glyph)
}

/// Expand a validated rank into its eight squares.
fn expand_rank(rank: &str) -> Vec<Option<char>> {
    let mut squares = Vec::with_capacity(8);
    for c in rank.chars() {
        match c.to_digit(10) {
            Some(empty) => squares.extend(std::iter::repeat(None).take(empty as usize)),
            None => squares.push(Some(c)),
        }
    }
    squares
}

fn file_label_row(out: &mut String) {
    out.push_str("<tr><td class=\"corner\"></td>");
    for file in FILES {
        let _ = write!(out, "<td class=\"file-label\">{}</td>", file);
    }
    out.push_str("<td class=\"corner\"></td></tr>\n");
}

/// Render a FEN position as an HTML board. Never fails; invalid input yields an error block.
pub fn fen_to_board(fen: &str) -> String {
    let fen = fen.trim();
    if let Err(err) = validate_fen(fen) {
        tracing::debug!(%err, "invalid FEN in pgn template");
        return format!(
            "<pre class=\"invalid-pgn\">Invalid FEN: {}\n{}</pre>",
            escape_html(&err.to_string()),
            escape_html(fen)
        );
    }

    let mut fields = fen.split_whitespace();
    let placement = fields.next().unwrap_or("");
    let white_to_move = fields.next() == Some("w");

    let mut out = String::from("<div class=\"chess-board\">\n");
    if white_to_move {
        out.push_str("<div class=\"chess-turn-indicator white-to-move\">White to move</div>\n");
    } else {
        out.push_str("<div class=\"chess-turn-indicator black-to-move\">Black to move</div>\n");
    }

    out.push_str("<table class=\"chess-grid\">\n");
    file_label_row(&mut out);
    for (rank_index, rank) in placement.split('/').enumerate() {
        let label = 8 - rank_index;
        let _ = write!(out, "<tr><td class=\"rank-label\">{}</td>", label);
        for (file_index, square) in expand_rank(rank).into_iter().enumerate() {
            let shade = if (rank_index + file_index) % 2 == 0 {
                "light"
            } else {
                "dark"
            };
            match square.and_then(|piece| glyph(piece).map(|g| (piece, g))) {
                Some((piece, g)) => {
                    let side = if piece.is_ascii_uppercase() {
                        "white"
                    } else {
                        "black"
                    };
                    let _ = write!(
                        out,
                        "<td class=\"square {}\"><span class=\"piece {}\">{}</span></td>",
                        shade, side, g
                    );
                }
                None => {
                    let _ = write!(out, "<td class=\"square {}\"></td>", shade);
                }
            }
        }
        let _ = writeln!(out, "<td class=\"rank-label\">{}</td></tr>", label);
    }
    file_label_row(&mut out);
    out.push_str("</table>\n");

    let _ = writeln!(
        out,
        "<details class=\"chess-fen\"><summary>FEN</summary><code>{}</code></details>",
        escape_html(fen)
    );
    out.push_str("</div>");
    out
}
