//! # TabBar Component
//!
//! The four-panel selector of the detail view. Stateless: the active tab
//! lives in core App state and arrives as a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::state::DetailTab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: DetailTab,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles: Vec<&str> = DetailTab::ALL.iter().map(|t| t.label()).collect();
        let selected = DetailTab::ALL
            .iter()
            .position(|t| *t == self.active)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, area);
    }
}
