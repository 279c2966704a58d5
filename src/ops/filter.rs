use std::collections::BTreeSet;

use crate::model::opening::Opening;

/// Normalize a search query: lowercase, surrounding whitespace removed.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// The first-move constraint in effect; an empty move constrains nothing.
pub fn active_first_move(first_move: Option<&str>) -> Option<&str> {
    first_move.filter(|m| !m.is_empty())
}

/// Whether an opening passes the query and first-move constraints.
/// `normalized` must already be passed through [`normalize_query`].
pub fn matches(opening: &Opening, normalized: &str, first_move: Option<&str>) -> bool {
    if let Some(fm) = active_first_move(first_move)
        && opening.first_move() != Some(fm)
    {
        return false;
    }
    if normalized.is_empty() {
        return true;
    }
    opening.name.to_lowercase().contains(normalized)
        || opening.eco.to_lowercase().contains(normalized)
}

/// Reduce `all` to the openings whose name or ECO code contains `query`
/// (case-insensitive) and whose first move equals `first_move` when given.
/// Catalog order is preserved.
pub fn filter_openings(all: &[Opening], query: &str, first_move: Option<&str>) -> Vec<Opening> {
    let q = normalize_query(query);
    all.iter()
        .filter(|o| matches(o, &q, first_move))
        .cloned()
        .collect()
}

/// True when either constraint narrows the catalog.
pub fn is_filtered(query: &str, first_move: Option<&str>) -> bool {
    active_first_move(first_move).is_some() || !query.trim().is_empty()
}

/// Distinct first moves across `openings`, sorted ascending.
/// Openings with no moves contribute nothing.
pub fn first_moves(openings: &[Opening]) -> Vec<String> {
    openings
        .iter()
        .filter_map(|o| o.first_move())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|m| m.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::opening::OpeningStyle;
    use pretty_assertions::assert_eq;

    fn opening(name: &str, eco: &str, moves: &[&str], style: OpeningStyle) -> Opening {
        Opening {
            name: name.into(),
            eco: eco.into(),
            moves: moves.iter().map(|m| m.to_string()).collect(),
            ideas: String::new(),
            style,
            famous: vec![],
        }
    }

    fn sample() -> Vec<Opening> {
        vec![
            opening(
                "Italian Game",
                "C50",
                &["e4", "e5", "Nf3", "Nc6", "Bc4"],
                OpeningStyle::Classical,
            ),
            opening(
                "Sicilian Najdorf",
                "B90",
                &["e4", "c5", "Nf3", "d6"],
                OpeningStyle::Aggressive,
            ),
            opening(
                "Queen's Gambit Declined",
                "D30",
                &["d4", "d5", "c4", "e6"],
                OpeningStyle::Positional,
            ),
            opening("English Opening", "A10", &["c4"], OpeningStyle::Flexible),
        ]
    }

    fn names(list: &[Opening]) -> Vec<&str> {
        list.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn no_filters_returns_everything() {
        assert_eq!(filter_openings(&sample(), "", None), sample());
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let result = filter_openings(&sample(), "ITALIAN", None);
        assert_eq!(names(&result), vec!["Italian Game"]);
    }

    #[test]
    fn eco_search() {
        let result = filter_openings(&sample(), "b90", None);
        assert_eq!(names(&result), vec!["Sicilian Najdorf"]);
    }

    #[test]
    fn partial_eco_code() {
        let result = filter_openings(&sample(), "c5", None);
        assert_eq!(names(&result), vec!["Italian Game"]);
    }

    #[test]
    fn first_move_filter_keeps_order() {
        let result = filter_openings(&sample(), "", Some("e4"));
        assert_eq!(names(&result), vec!["Italian Game", "Sicilian Najdorf"]);
    }

    #[test]
    fn empty_first_move_is_no_constraint() {
        assert_eq!(filter_openings(&sample(), "", Some("")), sample());
        let result = filter_openings(&sample(), "gambit", Some(""));
        assert_eq!(names(&result), vec!["Queen's Gambit Declined"]);
        assert!(!is_filtered("", Some("")));
        assert!(is_filtered("x", Some("")));
    }

    #[test]
    fn first_move_is_case_sensitive() {
        assert!(filter_openings(&sample(), "", Some("E4")).is_empty());
    }

    #[test]
    fn combined_constraints() {
        let result = filter_openings(&sample(), "sicilian", Some("e4"));
        assert_eq!(names(&result), vec!["Sicilian Najdorf"]);
        assert!(filter_openings(&sample(), "italian", Some("d4")).is_empty());
    }

    #[test]
    fn nothing_matches() {
        assert!(filter_openings(&sample(), "xyz", None).is_empty());
    }

    #[test]
    fn query_is_trimmed() {
        let result = filter_openings(&sample(), "  italian  ", None);
        assert_eq!(names(&result), vec!["Italian Game"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        for (q, fm) in [("", Some("e4")), ("an", None), ("c", Some("c4")), ("zzz", None)] {
            let once = filter_openings(&sample(), q, fm);
            let twice = filter_openings(&once, q, fm);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn is_filtered_signal() {
        assert!(!is_filtered("", None));
        assert!(!is_filtered("   ", None));
        assert!(is_filtered("x", None));
        assert!(is_filtered("", Some("e4")));
    }

    #[test]
    fn first_moves_sorted_unique() {
        assert_eq!(first_moves(&sample()), vec!["c4", "d4", "e4"]);
    }

    #[test]
    fn first_moves_empty() {
        assert!(first_moves(&[]).is_empty());
        let start = opening("Start", "A00", &[], OpeningStyle::Flexible);
        assert!(first_moves(&[start]).is_empty());
    }

    #[test]
    fn first_moves_strictly_ascending() {
        let mut list = sample();
        list.extend(sample());
        list.push(opening("Reti Opening", "A04", &["Nf3"], OpeningStyle::Flexible));
        let moves = first_moves(&list);
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(moves, vec!["Nf3", "c4", "d4", "e4"]);
    }
}
