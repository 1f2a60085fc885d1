//! Color theme system for expomo.
//!
//! A `Theme` holds named `ratatui::style::Color` fields for every surface the
//! timer renders. Two built-in themes are provided:
//!
//! - `dark`: ANSI 16 colors only, so it works on any terminal including
//!   256-color SSH sessions with no truecolor support.
//! - `catppuccin_mocha`: Catppuccin Mocha palette in RGB; requires truecolor.

use ratatui::style::Color;

/// All color values used across expomo's screens.
#[derive(Debug, Clone)]
pub struct Theme {
    // Frame
    /// Border of the main timer box while an interval is running.
    pub border_active: Color,
    /// Border of the main timer box in every other state.
    pub border_inactive: Color,

    // Interval accents
    /// Clock and gauge color during a work interval.
    pub work: Color,
    /// Clock and gauge color during a short break.
    pub short_break: Color,
    /// Clock and gauge color during a long break.
    pub long_break: Color,

    // Mode badges
    pub mode_running: Color,
    pub mode_paused: Color,
    pub mode_stopped: Color,
    pub mode_target: Color,

    // Text
    /// Key names in the command hints.
    pub hint_key: Color,
    /// Descriptions in the command hints and secondary labels.
    pub hint_text: Color,
    /// The target entry field.
    pub input: Color,

    // Status bar
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            work: Color::Red,
            short_break: Color::Green,
            long_break: Color::Blue,

            mode_running: Color::Green,
            mode_paused: Color::Yellow,
            mode_stopped: Color::Magenta,
            mode_target: Color::Cyan,

            hint_key: Color::Cyan,
            hint_text: Color::Gray,
            input: Color::White,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let red = Color::Rgb(243, 139, 168); // #f38ba8
        let green = Color::Rgb(166, 227, 161); // #a6e3a1
        let yellow = Color::Rgb(249, 226, 175); // #f9e2af
        let blue = Color::Rgb(137, 180, 250); // #89b4fa
        let mauve = Color::Rgb(203, 166, 247); // #cba6f7
        let teal = Color::Rgb(148, 226, 213); // #94e2d5
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface1 = Color::Rgb(69, 71, 90); // #45475a
        let text = Color::Rgb(205, 214, 244); // #cdd6f4

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            work: red,
            short_break: green,
            long_break: blue,

            mode_running: green,
            mode_paused: yellow,
            mode_stopped: mauve,
            mode_target: teal,

            hint_key: lavender,
            hint_text: overlay1,
            input: text,

            status_bar_bg: surface1,
            status_bar_fg: text,
        }
    }

    /// Resolves a theme name to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never prevents
    /// startup. The fallback is logged, not treated as an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!(theme = other, "unknown theme, falling back to 'dark'");
                Self::dark()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_builtins() {
        assert_eq!(Theme::from_name("catppuccin-mocha").work, Theme::catppuccin_mocha().work);
        assert_eq!(Theme::from_name("catppuccin_mocha").work, Theme::catppuccin_mocha().work);
        assert_eq!(Theme::from_name("dark").work, Color::Red);
    }

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("solarized").border_active, Theme::dark().border_active);
    }
}
