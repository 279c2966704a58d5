use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Pad `s` with trailing spaces to exactly `cells` wide, truncating first if needed.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    if w < cells {
        out.push_str(&" ".repeat(cells - w));
    }
    out
}

/// Drop the last grapheme cluster, for backspace in text inputs.
pub fn pop_grapheme(s: &mut String) {
    if let Some((i, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("Najdorf"), 7);
    }

    #[test]
    fn display_width_chess_glyphs() {
        assert_eq!(display_width("♔♕"), 2);
    }

    #[test]
    fn display_width_combining() {
        assert_eq!(display_width("Gru\u{0308}nfeld"), 8);
    }

    #[test]
    fn display_width_empty() {
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("e4", 10), "e4");
    }

    #[test]
    fn truncate_exact_fit() {
        assert_eq!(truncate_to_width("Slav", 4), "Slav");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("Sicilian Defense", 9), "Sicilian\u{2026}");
    }

    #[test]
    fn truncate_cjk_boundary() {
        let result = truncate_to_width("你好世界", 4);
        assert!(display_width(&result) <= 4);
        assert!(result.ends_with('\u{2026}'));
    }

    #[test]
    fn truncate_keeps_combining_marks_together() {
        assert_eq!(truncate_to_width("Gru\u{0308}nfeld", 4), "Gru\u{0308}\u{2026}");
    }

    #[test]
    fn truncate_zero_and_one() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit_to_width("B90", 5), "B90  ");
        assert_eq!(fit_to_width("Caro-Kann", 5), "Caro\u{2026}");
    }

    #[test]
    fn pop_grapheme_handles_multibyte() {
        let mut s = String::from("Re\u{0301}ti");
        pop_grapheme(&mut s);
        assert_eq!(s, "Re\u{0301}t");
        pop_grapheme(&mut s);
        pop_grapheme(&mut s);
        assert_eq!(s, "R");
        pop_grapheme(&mut s);
        pop_grapheme(&mut s);
        assert_eq!(s, "");
    }
}
