//! Clipboard access for the Cut/Copy/Paste buttons.
//!
//! The system clipboard may be missing (headless sessions, some Wayland
//! setups), so every copy is also kept in an in-process buffer that
//! paste falls back to.

/// System clipboard with an internal fallback that always works.
pub struct Clipboard {
    use_system: bool,
    internal: String,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard {
    pub fn new() -> Self {
        Self { use_system: true, internal: String::new() }
    }

    /// Never touches the system clipboard.
    #[cfg(test)]
    pub(crate) fn internal_only() -> Self {
        Self { use_system: false, internal: String::new() }
    }

    pub fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.internal = text.to_string();

        if self.use_system {
            // fresh handle each time; a long-lived one goes stale on some platforms
            match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
                Ok(()) => {}
                Err(e) => log::warn!("system clipboard unavailable, keeping copy internally: {}", e),
            }
        }
    }

    /// Clipboard text, preferring the system clipboard.
    pub fn get_text(&mut self) -> Option<String> {
        let system = if self.use_system {
            arboard::Clipboard::new()
                .and_then(|mut cb| cb.get_text())
                .ok()
                .filter(|t| !t.is_empty())
        } else {
            None
        };

        system.or_else(|| {
            if self.internal.is_empty() {
                None
            } else {
                Some(self.internal.clone())
            }
        })
    }
}
