//! Move replay for position display.
//!
//! Tokens are replayed from the standard starting position with shakmaty so
//! the details panel can show the resulting board. Nothing beyond legality
//! of each ply is checked.

use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{Chess, Color, EnPassantMode, File, Position, Rank, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("ply {ply}: '{token}' is not a move in algebraic notation")]
    InvalidToken { ply: usize, token: String },
    #[error("ply {ply}: '{token}' is not legal in this position")]
    IllegalMove { ply: usize, token: String },
}

/// Replay SAN tokens from the starting position.
pub fn replay<S: AsRef<str>>(moves: &[S]) -> Result<Chess, BoardError> {
    let mut pos = Chess::default();
    for (i, token) in moves.iter().enumerate() {
        let token = token.as_ref();
        let san: SanPlus = token.parse().map_err(|_| BoardError::InvalidToken {
            ply: i + 1,
            token: token.to_string(),
        })?;
        let m = san.san.to_move(&pos).map_err(|_| BoardError::IllegalMove {
            ply: i + 1,
            token: token.to_string(),
        })?;
        pos.play_unchecked(&m);
    }
    Ok(pos)
}

/// FEN of a replayed position
pub fn fen_of(pos: &Chess) -> String {
    Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string()
}

/// FEN of the position reached after `moves`.
pub fn moves_to_fen<S: AsRef<str>>(moves: &[S]) -> Result<String, BoardError> {
    replay(moves).map(|pos| fen_of(&pos))
}

/// An 8x8 grid of piece letters (FEN letters: uppercase white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    /// `squares[rank][file]`, rank 0 is the first rank, file 0 is the a-file
    squares: [[Option<char>; 8]; 8],
    white_to_move: bool,
}

impl BoardGrid {
    /// Read piece placement and side to move off a position.
    pub fn from_position(pos: &Chess) -> BoardGrid {
        let board = pos.board();
        let mut squares = [[None; 8]; 8];
        for (rank, row) in squares.iter_mut().enumerate() {
            for (file, cell) in row.iter_mut().enumerate() {
                let sq = Square::from_coords(File::new(file as u32), Rank::new(rank as u32));
                *cell = board.piece_at(sq).map(|piece| piece.char());
            }
        }
        BoardGrid {
            squares,
            white_to_move: pos.turn() == Color::White,
        }
    }

    /// Grid of the position reached after `moves`.
    pub fn after<S: AsRef<str>>(moves: &[S]) -> Result<BoardGrid, BoardError> {
        replay(moves).map(|pos| BoardGrid::from_position(&pos))
    }

    pub fn start() -> BoardGrid {
        BoardGrid::from_position(&Chess::default())
    }

    /// Piece letter on a square; `file` and `rank` are 0-based from a1.
    pub fn piece_at(&self, file: usize, rank: usize) -> Option<char> {
        self.squares.get(rank)?.get(file).copied().flatten()
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Plain-text diagram, eighth rank first, `.` for empty squares.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            out.push_str(&format!("{} ", rank + 1));
            for file in 0..8 {
                out.push(' ');
                out.push(self.piece_at(file, rank).unwrap_or('.'));
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h");
        out
    }
}

/// Unicode chess glyph for a FEN piece letter
pub fn piece_glyph(piece: char) -> char {
    match piece {
        'K' => '\u{2654}',
        'Q' => '\u{2655}',
        'R' => '\u{2656}',
        'B' => '\u{2657}',
        'N' => '\u{2658}',
        'P' => '\u{2659}',
        'k' => '\u{265A}',
        'q' => '\u{265B}',
        'r' => '\u{265C}',
        'b' => '\u{265D}',
        'n' => '\u{265E}',
        'p' => '\u{265F}',
        other => other,
    }
}
