//! Keyboard navigation keys

/// Keys that navigate the carousel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Prev,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value. Legacy `Left`/`Right` names are accepted.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "Right" => Some(NavKey::Next),
            "ArrowLeft" | "Left" => Some(NavKey::Prev),
            _ => None,
        }
    }
}
