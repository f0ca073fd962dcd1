//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
}

/// Title bar and entry indicator
pub mod title {
    use super::*;

    pub const APP_NAME: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const INPUT_LABEL: Color = palette::TEXT_MUTED;
    pub const INPUT_TEXT: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    // Shown once the next keystroke will start a fresh entry
    pub const READY_MARKER: Color = palette::GREEN;
}

/// Detail panel styles
pub mod detail {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const HEADLINE: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const MORE: Color = palette::TEXT_MUTED;
    // Several candidates while the operator may still be typing
    pub const TENTATIVE: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .add_modifier(Modifier::ITALIC);
    pub const NOT_FOUND: Style = Style::new()
        .fg(palette::ERROR)
        .add_modifier(Modifier::BOLD);
    pub const PROMPT: Color = palette::TEXT_MUTED;
    pub const LOADING: Style = Style::new()
        .fg(palette::WARNING)
        .add_modifier(Modifier::ITALIC);
}

/// Participant table styles
pub mod table {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const HEADER: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const HEADER_ACTIVE: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    pub const ROW: Color = palette::TEXT;
    pub const ROW_HIGHLIGHT: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    pub const EMPTY: Color = palette::TEXT_MUTED;
    pub const COUNT: Color = palette::TEXT_MUTED;
}

/// Load error banner
pub mod banner {
    use super::*;

    pub const ERROR: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::ERROR)
        .add_modifier(Modifier::BOLD);
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(130, 133, 158),
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}

/// Scrollbar styles
pub mod scrollbar {
    use super::*;

    pub const DEFAULT: Color = palette::CYAN;
}
