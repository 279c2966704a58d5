use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Normalize key events from terminals using the kitty keyboard protocol.
///
/// Kitty sends `Char(lowercase) + SHIFT` where traditional terminals send
/// `Char(UPPERCASE) + SHIFT`; both end up as the uppercase form.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_lowercase_becomes_uppercase() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('M'));
        assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn plain_keys_untouched() {
        let key = normalize_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(key.code, KeyCode::Char('G'));
        let key = normalize_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(key.code, KeyCode::Char('j'));
    }
}
