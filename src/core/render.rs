//! Level-to-prefix rendering strategies
//!
//! The journal reads the priority from a `<N>` prefix at the start of each
//! line. Interactive runs usually want something human-readable instead,
//! so the renderer is a swappable strategy stored on the handler.

use super::priority::PriorityLevel;
use std::sync::Arc;

/// Renders the prefix placed in front of every message
pub type LevelRenderer = Arc<dyn Fn(PriorityLevel) -> String + Send + Sync>;

/// `<N>` prefix understood by systemd-journald and syslog
#[must_use]
pub fn render_prefix(level: PriorityLevel) -> String {
    format!("<{}>", level.value())
}

/// `[warning] ` style tag for reading logs in a terminal
#[must_use]
pub fn render_bracketed_name(level: PriorityLevel) -> String {
    format!("[{}] ", level)
}

/// Bracketed name colored by severity
#[cfg(feature = "console")]
#[must_use]
pub fn render_colored_name(level: PriorityLevel) -> String {
    use colored::{Color, Colorize};

    let color = match level.value() {
        i32::MIN..=2 => Color::BrightRed,
        3 => Color::Red,
        4 => Color::Yellow,
        5 => Color::Cyan,
        6 => Color::Green,
        _ => Color::BrightBlack,
    };
    format!("[{}] ", level.to_string().color(color))
}

/// The default renderer, [`render_prefix`]
#[must_use]
pub fn default_renderer() -> LevelRenderer {
    Arc::new(render_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_for_named_levels() {
        assert_eq!(render_prefix(PriorityLevel::EMERGENCY), "<0>");
        assert_eq!(render_prefix(PriorityLevel::INFO), "<6>");
        assert_eq!(render_prefix(PriorityLevel::DEBUG), "<7>");
    }

    #[test]
    fn test_prefix_is_stable() {
        for level in PriorityLevel::ALL {
            assert_eq!(render_prefix(level), render_prefix(level));
        }
    }

    #[test]
    fn test_prefix_for_out_of_band_levels() {
        assert_eq!(render_prefix(PriorityLevel::from_raw(-2)), "<-2>");
        assert_eq!(render_prefix(PriorityLevel::from_raw(12)), "<12>");
    }

    #[test]
    fn test_bracketed_name() {
        assert_eq!(render_bracketed_name(PriorityLevel::ERROR), "[err] ");
        assert_eq!(render_bracketed_name(PriorityLevel::from_raw(9)), "[9] ");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_colored_name_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(render_colored_name(PriorityLevel::NOTICE), "[notice] ");
    }

    #[test]
    fn test_default_renderer_matches_prefix() {
        let renderer = default_renderer();
        assert_eq!(renderer(PriorityLevel::WARNING), "<4>");
    }
}
