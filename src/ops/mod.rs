pub mod board;
pub mod check;
pub mod expansion;
pub mod filter;
pub mod pgn;
pub mod selection;
