use crate::model::opening::Opening;

/// The single opening shown in the details panel, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<Opening>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn get(&self) -> Option<&Opening> {
        self.current.as_ref()
    }

    pub fn select(&mut self, opening: Opening) {
        self.current = Some(opening);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Whether `opening` is the selected one, by (eco, name)
    pub fn is_selected(&self, opening: &Opening) -> bool {
        self.current.as_ref().is_some_and(|s| s.same_as(opening))
    }

    /// Re-check the selection against a new filtered list. The selection is
    /// dropped when no opening in `filtered` shares its (eco, name); it is
    /// otherwise left untouched. Returns true if it was dropped.
    pub fn reconcile(&mut self, filtered: &[Opening]) -> bool {
        let keep = match &self.current {
            Some(sel) => filtered.iter().any(|o| o.same_as(sel)),
            None => return false,
        };
        if !keep {
            self.current = None;
        }
        !keep
    }
}
