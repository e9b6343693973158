//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
///
/// Each field corresponds to a specific visual element in the TUI.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Article card --
    pub card_title: Style,
    pub card_description: Style,
    pub card_extract: Style,
    pub card_meta: Style,
    pub card_link: Style,
    pub card_peek: Style,

    // -- Navbar --
    pub chip: Style,
    pub chip_selected: Style,
    pub chip_highlight: Style,
    pub input: Style,

    // -- Navigation --
    pub nav_button: Style,
    pub nav_button_disabled: Style,
    pub spinner: Style,

    // -- Category browser --
    pub modal_group: Style,
    pub modal_item: Style,
    pub modal_selected: Style,

    // -- Chrome --
    pub heading: Style,
    pub metadata: Style,
    pub error: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            // Card
            card_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_description: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),
            card_extract: Style::default(),
            card_meta: Style::default().fg(Color::DarkGray),
            card_link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            card_peek: Style::default().fg(Color::DarkGray),

            // Navbar
            chip: Style::default().fg(Color::Gray),
            chip_selected: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            chip_highlight: Style::default().bg(Color::DarkGray).fg(Color::White),
            input: Style::default().fg(Color::Yellow),

            // Navigation
            nav_button: Style::default().fg(Color::White).bg(Color::DarkGray),
            nav_button_disabled: Style::default().fg(Color::DarkGray),
            spinner: Style::default().fg(Color::Yellow),

            // Category browser
            modal_group: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            modal_item: Style::default(),
            modal_selected: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            // Chrome
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            metadata: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            // Card
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_description: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),
            card_extract: Style::default().fg(Color::Black),
            card_meta: Style::default().fg(Color::DarkGray),
            card_link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            card_peek: Style::default().fg(Color::DarkGray),

            // Navbar
            chip: Style::default().fg(Color::DarkGray),
            chip_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            chip_highlight: Style::default().bg(Color::Gray).fg(Color::Black),
            input: Style::default().fg(Color::Magenta),

            // Navigation
            nav_button: Style::default().fg(Color::White).bg(Color::Blue),
            nav_button_disabled: Style::default().fg(Color::Gray),
            spinner: Style::default().fg(Color::Magenta),

            // Category browser
            modal_group: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            modal_item: Style::default().fg(Color::Black),
            modal_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            // Chrome
            heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            metadata: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup for render code
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"card_title"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 22] = [
    "card_title",
    "card_description",
    "card_extract",
    "card_meta",
    "card_link",
    "card_peek",
    "chip",
    "chip_selected",
    "chip_highlight",
    "input",
    "nav_button",
    "nav_button_disabled",
    "spinner",
    "modal_group",
    "modal_item",
    "modal_selected",
    "heading",
    "metadata",
    "error",
    "status_bar",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 22] = [
            p.card_title,
            p.card_description,
            p.card_extract,
            p.card_meta,
            p.card_link,
            p.card_peek,
            p.chip,
            p.chip_selected,
            p.chip_highlight,
            p.input,
            p.nav_button,
            p.nav_button_disabled,
            p.spinner,
            p.modal_group,
            p.modal_item,
            p.modal_selected,
            p.heading,
            p.metadata,
            p.error,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_selected_chip_stands_out() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.chip_selected,
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        );
        assert_ne!(palette.chip, palette.chip_selected);
    }

    #[test]
    fn dark_palette_status_bar() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.status_bar,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn disabled_button_differs_from_enabled() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            let p = variant.palette();
            assert_ne!(p.nav_button, p.nav_button_disabled);
        }
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.chip_selected, light.chip_selected);
        assert_ne!(dark.modal_selected, light.modal_selected);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycles() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);

        assert_eq!(sm.resolve("card_title"), palette.card_title);
        assert_eq!(sm.resolve("chip_selected"), palette.chip_selected);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn role_names_count_matches_palette_fields() {
        let palette = ThemeVariant::Light.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
        for name in ROLE_NAMES {
            assert!(sm.map.contains_key(name), "Role '{}' missing from StyleMap", name);
        }
    }
}
