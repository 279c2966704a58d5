/// Convert a move list to PGN move text: `"1. e4 e5 2. Nf3 Nc6"`.
///
/// Every white move gets its move number; a sequence ending on a white move
/// has no trailing black move. An empty list gives an empty string.
pub fn moves_to_pgn<S: AsRef<str>>(moves: &[S]) -> String {
    let mut out = String::new();
    for (i, m) in moves.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if i % 2 == 0 {
            out.push_str(&format!("{}. ", i / 2 + 1));
        }
        out.push_str(m.as_ref());
    }
    out
}

/// Move-number label for the ply at `index` (0-based) as shown beside a
/// single move: `"1."` for white's first move, `"1..."` for black's reply.
pub fn ply_label(index: usize) -> String {
    if index % 2 == 0 {
        format!("{}.", index / 2 + 1)
    } else {
        format!("{}...", index / 2 + 1)
    }
}
