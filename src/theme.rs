/// Class toggled on the document root element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Choose between the dark and light variant of a class list.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }

    /// Background of the page root.
    pub fn page_class(self) -> &'static str {
        self.pick(
            "bg-gradient-to-b from-gray-900 via-gray-800 to-gray-900",
            "bg-gradient-to-b from-gray-50 via-white to-gray-50",
        )
    }

    /// Body copy color used across sections and cards.
    pub fn muted_text(self) -> &'static str {
        self.pick("text-gray-300", "text-gray-600")
    }

    pub fn heading_text(self) -> &'static str {
        self.pick("text-white", "text-gray-900")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_visual_state_round_trip() {
        let theme = Theme::default();
        let toggled = theme.toggled();
        assert!(toggled.is_dark());
        assert_ne!(toggled.page_class(), theme.page_class());

        let back = toggled.toggled();
        assert!(!back.is_dark());
        assert_eq!(back.page_class(), theme.page_class());
        assert_eq!(back.muted_text(), theme.muted_text());
    }

    #[test]
    fn test_pick() {
        assert_eq!(Theme::Dark.pick("a", "b"), "a");
        assert_eq!(Theme::Light.pick("a", "b"), "b");
        assert!(Theme::Dark.page_class().contains("gray-900"));
    }
}
