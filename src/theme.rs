#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    OneDark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub rank: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::OneDark, Theme::Light];

    pub fn key(self) -> &'static str {
        match self {
            Theme::OneDark => "onedark",
            Theme::Light => "light",
        }
    }

    /// Total lookup: unknown or missing keys resolve to the default theme.
    pub fn from_key(key: Option<&str>) -> Theme {
        key.and_then(|k| Theme::ALL.into_iter().find(|t| t.key() == k))
            .unwrap_or_default()
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::OneDark => ThemeColors {
                bg: "#282c34",
                text: "#c8ccd4",
                rank: "#e5c07b",
                border: "#e06c75",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#333333",
                rank: "#d35400",
                border: "#e67e22",
            },
        }
    }
}
