//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use favgame_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Favorite control icon: filled when favorite, outline otherwise
    pub fn heart(&self, filled: bool) -> &'static str {
        match (self.mode, filled) {
            (IconMode::NerdFonts, true) => "\u{f004}", // nf-fa-heart
            (IconMode::NerdFonts, false) => "\u{f08a}", // nf-fa-heart_o
            (IconMode::Unicode, true) => "\u{2665}",   // ♥
            (IconMode::Unicode, false) => "\u{2661}",  // ♡
        }
    }

    pub fn back(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{2039}",   // ‹
        }
    }

    pub fn star(&self, filled: bool) -> &'static str {
        match (self.mode, filled) {
            (IconMode::NerdFonts, true) => "\u{f005}", // nf-fa-star
            (IconMode::NerdFonts, false) => "\u{f006}", // nf-fa-star_o
            (IconMode::Unicode, true) => "\u{2605}",   // ★
            (IconMode::Unicode, false) => "\u{2606}",  // ☆
        }
    }

    pub fn calendar(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f073}", // nf-fa-calendar
            IconMode::Unicode => "\u{25f7}",   // ◷
        }
    }

    pub fn clock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f017}", // nf-fa-clock_o
            IconMode::Unicode => "\u{29d6}",   // ⧖
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_filled_and_outline_differ() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let icons = IconSet::new(mode);
            assert_ne!(icons.heart(true), icons.heart(false));
        }
    }

    #[test]
    fn test_unicode_icons_are_non_empty() {
        let icons = IconSet::new(IconMode::Unicode);
        assert!(!icons.back().is_empty());
        assert!(!icons.star(true).is_empty());
        assert!(!icons.calendar().is_empty());
        assert!(!icons.clock().is_empty());
        assert!(!icons.alert().is_empty());
        assert!(!icons.refresh().is_empty());
    }

    #[test]
    fn test_unicode_and_nerd_font_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.heart(true), nerd.heart(true));
        assert_ne!(unicode.back(), nerd.back());
    }
}
