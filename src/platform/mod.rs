//! Platform abstraction layer
//!
//! Translates browser input into simulation input. Kept free of `web_sys` so
//! the mapping is testable natively.

use crate::sim::Key;

/// Map a DOM `KeyboardEvent.key` value to a game key
pub fn key_from_dom(key: &str) -> Option<Key> {
    match key {
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map() {
        assert_eq!(key_from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(key_from_dom("ArrowRight"), Some(Key::Right));
    }

    #[test]
    fn test_other_keys_ignored() {
        for key in ["ArrowUp", "ArrowDown", "a", "d", " ", "Enter", "arrowleft", ""] {
            assert_eq!(key_from_dom(key), None, "{:?}", key);
        }
    }
}
