//! # Moves Tab
//!
//! All move names in a three-column grid inside a scroll view. Move lists
//! run to hundreds of entries, so this is the one panel that scrolls.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Pokemon;
use crate::tui::component::Component;

const COLUMNS: u16 = 3;

pub struct MovesTab<'a> {
    pub pokemon: Option<&'a Pokemon>,
    pub scroll_state: &'a mut ScrollViewState,
}

impl Component for MovesTab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(pokemon) = self.pokemon else {
            return;
        };

        let content_width = area.width.saturating_sub(1).max(COLUMNS);
        let column_width = content_width / COLUMNS;
        let rows = pokemon.moves.len().div_ceil(COLUMNS as usize) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, rows.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, slot) in pokemon.moves.iter().enumerate() {
            let row = (i as u16) / COLUMNS;
            let col = (i as u16) % COLUMNS;
            let cell = Rect::new(col * column_width, row, column_width, 1);
            scroll_view.render_widget(
                Line::from(Span::styled(
                    slot.data.name.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                cell,
            );
        }

        frame.render_stateful_widget(scroll_view, area, self.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_pokemon;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_moves_tab_lists_move_names() {
        let pokemon = sample_pokemon("bulbasaur");
        let mut scroll_state = ScrollViewState::default();
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut tab = MovesTab {
                    pokemon: Some(&pokemon),
                    scroll_state: &mut scroll_state,
                };
                tab.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("tackle"));
        assert!(text.contains("vine-whip"));
    }
}
