//! # TitleBar Component
//!
//! Top status bar showing where the user is and what the app is doing.
//!
//! Stateless: all props come from elsewhere (`title` is derived from the
//! current view, `status_message` is core App state, the spinner frame
//! comes from the event loop's animation timer). The TitleBar doesn't care
//! where they come from, it just renders what it's given.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component.
pub struct TitleBar {
    /// View-derived heading (e.g. "Dexter — Pokédex").
    pub title: String,
    /// Transient status (e.g. "40 of 1302 loaded").
    pub status_message: String,
    /// When true a spinner frame is appended to the line.
    pub is_loading: bool,
    /// Animation frame index from the event loop.
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            title,
            status_message,
            is_loading,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = if self.status_message.is_empty() {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, self.status_message)
        };
        if self.is_loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            title_text.push_str(&format!(" {spinner}"));
        }

        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Dexter — Pokédex".to_string(),
            "20 of 1302 loaded".to_string(),
            false,
            0,
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Dexter — Pokédex"));
        assert!(text.contains("20 of 1302 loaded"));
        assert!(text.contains('|'));
    }

    #[test]
    fn test_title_bar_without_status_has_no_separator() {
        let mut title_bar = TitleBar::new("Dexter — Pokédex".to_string(), String::new(), false, 0);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Dexter"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_spinner_only_while_loading() {
        let mut loading = TitleBar::new("Dexter".to_string(), String::new(), true, 0);
        let text = render_to_text(&mut loading);
        assert!(text.contains('⠋'));

        let mut idle = TitleBar::new("Dexter".to_string(), String::new(), false, 0);
        let text = render_to_text(&mut idle);
        assert!(!text.contains('⠋'));
    }
}
