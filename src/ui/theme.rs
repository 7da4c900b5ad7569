//! Color themes and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Four Catppuccin flavors are built in; a custom
//! theme can be loaded from a file with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark, the default
//! - `catppuccin-latte`: light
//! - `catppuccin-frappe`
//! - `catppuccin-macchiato`
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! success_fg = "#a6e3a1"
//! failed_fg = "#f38ba8"
//! upcoming_fg = "#89b4fa"
//! favorite_fg = "#f9e2af"
//! ```

use crate::domain::{ExplorerError, LaunchOutcome, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

const CATPPUCCIN_MOCHA: &str = r##"
name = "catppuccin-mocha"

[colors]
header_fg = "#cdd6f4"
selection_fg = "#1e1e2e"
selection_bg = "#f5c2e7"
text_normal = "#cdd6f4"
text_dim = "#6c7086"
border = "#45475a"
search_bar_border = "#f5c2e7"
match_highlight_fg = "#1e1e2e"
match_highlight_bg = "#f9e2af"
empty_state_fg = "#89b4fa"
success_fg = "#a6e3a1"
failed_fg = "#f38ba8"
upcoming_fg = "#89b4fa"
favorite_fg = "#f9e2af"
"##;

const CATPPUCCIN_LATTE: &str = r##"
name = "catppuccin-latte"

[colors]
header_fg = "#4c4f69"
selection_fg = "#eff1f5"
selection_bg = "#ea76cb"
text_normal = "#4c4f69"
text_dim = "#9ca0b0"
border = "#bcc0cc"
search_bar_border = "#ea76cb"
match_highlight_fg = "#eff1f5"
match_highlight_bg = "#df8e1d"
empty_state_fg = "#1e66f5"
success_fg = "#40a02b"
failed_fg = "#d20f39"
upcoming_fg = "#1e66f5"
favorite_fg = "#df8e1d"
"##;

const CATPPUCCIN_FRAPPE: &str = r##"
name = "catppuccin-frappe"

[colors]
header_fg = "#c6d0f5"
selection_fg = "#303446"
selection_bg = "#f4b8e4"
text_normal = "#c6d0f5"
text_dim = "#737994"
border = "#51576d"
search_bar_border = "#f4b8e4"
match_highlight_fg = "#303446"
match_highlight_bg = "#e5c890"
empty_state_fg = "#8caaee"
success_fg = "#a6d189"
failed_fg = "#e78284"
upcoming_fg = "#8caaee"
favorite_fg = "#e5c890"
"##;

const CATPPUCCIN_MACCHIATO: &str = r##"
name = "catppuccin-macchiato"

[colors]
header_fg = "#cad3f5"
selection_fg = "#24273a"
selection_bg = "#f5bde6"
text_normal = "#cad3f5"
text_dim = "#6e738d"
border = "#494d64"
search_bar_border = "#f5bde6"
match_highlight_fg = "#24273a"
match_highlight_bg = "#eed49f"
empty_state_fg = "#8aadf4"
success_fg = "#a6da95"
failed_fg = "#ed8796"
upcoming_fg = "#8aadf4"
favorite_fg = "#eed49f"
"##;

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles, secondary columns.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Outcome badge colors.
    pub success_fg: String,
    pub failed_fg: String,
    pub upcoming_fg: String,

    /// Favorite star.
    pub favorite_fg: String,
}

impl Theme {
    /// Looks up a built-in theme, `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name {
            "catppuccin-mocha" => CATPPUCCIN_MOCHA,
            "catppuccin-latte" => CATPPUCCIN_LATTE,
            "catppuccin-frappe" => CATPPUCCIN_FRAPPE,
            "catppuccin-macchiato" => CATPPUCCIN_MACCHIATO,
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ExplorerError::Theme(format!("Failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| ExplorerError::Theme(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Badge color for a launch outcome.
    #[must_use]
    pub fn outcome_color(&self, outcome: LaunchOutcome) -> &str {
        match outcome {
            LaunchOutcome::Success => &self.colors.success_fg,
            LaunchOutcome::Failed => &self.colors.failed_fg,
            LaunchOutcome::Upcoming => &self.colors.upcoming_fg,
            LaunchOutcome::Unknown => &self.colors.text_dim,
        }
    }

    /// `#rrggbb` to RGB; malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the built-in default somehow fails to parse.
    fn monochrome() -> Self {
        let light = "#d0d0d0".to_string();
        let dark = "#202020".to_string();
        let grey = "#808080".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: light.clone(),
                header_bg: None,
                selection_fg: dark.clone(),
                selection_bg: light.clone(),
                text_normal: light.clone(),
                text_dim: grey.clone(),
                border: grey.clone(),
                search_bar_border: light.clone(),
                match_highlight_fg: dark,
                match_highlight_bg: light.clone(),
                empty_state_fg: light.clone(),
                success_fg: light.clone(),
                failed_fg: light.clone(),
                upcoming_fg: grey,
                favorite_fg: light,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_parses() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name);
            assert_eq!(theme.map(|t| t.name), Some(name.to_string()));
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_is_mocha() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATPPUCCIN_LATTE.replace("catppuccin-latte", "mine").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
        assert_eq!(theme.colors.success_fg, "#40a02b");
    }

    #[test]
    fn incomplete_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = \"#000000\"\n")
            .unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(ExplorerError::Theme(_))));
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::fg("#ff8000"), "\u{001b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("nope"), "\u{001b}[48;2;255;255;255m");
    }
}
