//! # DetailHeader Component
//!
//! The detail view's banner: creature name, ordinal, and one colored badge
//! per typed slot, over a background wash in the first type's color. Renders
//! a bare "Loading" banner until stage one of the detail sequence lands.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::api::Pokemon;
use crate::tui::component::Component;
use crate::tui::theme::{ColorContext, type_color};

pub struct DetailHeader<'a> {
    /// Stage-one result; `None` while the fetch is still in flight.
    pub pokemon: Option<&'a Pokemon>,
    /// Identifier shown while the record is pending.
    pub fallback_name: &'a str,
}

/// Uppercases the first character for display ("bulbasaur" → "Bulbasaur").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl Component for DetailHeader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(pokemon) = self.pokemon else {
            let pending = Paragraph::new(format!("{} …", capitalize(self.fallback_name)))
                .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
            frame.render_widget(pending, area);
            return;
        };

        let wash = type_color(pokemon.primary_type(), ColorContext::Background);

        let mut badge_spans: Vec<Span> = vec![Span::styled(
            format!("{} ", capitalize(&pokemon.name)),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        let mut slots: Vec<_> = pokemon.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        for slot in slots {
            badge_spans.push(Span::styled(
                format!(" {} ", slot.kind.name),
                Style::default()
                    .bg(type_color(&slot.kind.name, ColorContext::Badge))
                    .fg(Color::Black),
            ));
            badge_spans.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(badge_spans),
            Line::from(Span::styled(
                format!("#{}", pokemon.order),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let header = Paragraph::new(lines)
            .style(Style::default().bg(wash))
            .block(Block::bordered().border_style(Style::default().bg(wash)));
        frame.render_widget(header, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_pokemon;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    fn render_to_text(header: &mut DetailHeader) -> String {
        let backend = TestBackend::new(60, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_name_ordinal_and_badges() {
        let pokemon = sample_pokemon("bulbasaur");
        let mut header = DetailHeader {
            pokemon: Some(&pokemon),
            fallback_name: "bulbasaur",
        };
        let text = render_to_text(&mut header);
        assert!(text.contains("Bulbasaur"));
        assert!(text.contains("#1"));
        assert!(text.contains("grass"));
        assert!(text.contains("poison"));
    }

    #[test]
    fn test_header_pending_uses_fallback_name() {
        let mut header = DetailHeader {
            pokemon: None,
            fallback_name: "mewtwo",
        };
        let text = render_to_text(&mut header);
        assert!(text.contains("Mewtwo"));
    }
}
