//! # Base Stats Tab
//!
//! One row per base-stat entry: name, numeric value, and a gauge filled
//! proportionally to the value (clamped at 100, matching the scale the
//! upstream display used). The gauge fill takes the first-slot type's color.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Gauge;

use crate::api::Pokemon;
use crate::tui::component::Component;
use crate::tui::theme::{ColorContext, type_color};

const LABEL_WIDTH: u16 = 18;
const VALUE_WIDTH: u16 = 5;

pub struct StatsTab<'a> {
    pub pokemon: Option<&'a Pokemon>,
}

impl Component for StatsTab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(pokemon) = self.pokemon else {
            return;
        };
        let fill = type_color(pokemon.primary_type(), ColorContext::Gauge);

        for (i, stat) in pokemon.stats.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let row = Rect::new(area.x, y, area.width, 1);
            let [label_area, value_area, gauge_area] = Layout::horizontal([
                Constraint::Length(LABEL_WIDTH),
                Constraint::Length(VALUE_WIDTH),
                Constraint::Min(10),
            ])
            .areas(row);

            frame.render_widget(
                Line::from(Span::styled(
                    stat.stat.name.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                label_area,
            );
            frame.render_widget(
                Line::from(Span::styled(
                    stat.base_stat.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                value_area,
            );

            let ratio = (stat.base_stat.min(100) as f64) / 100.0;
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(fill).bg(Color::DarkGray))
                .ratio(ratio)
                .label("");
            frame.render_widget(gauge, gauge_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_pokemon;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_stats_tab_renders_name_and_value_per_entry() {
        let pokemon = sample_pokemon("bulbasaur");
        let backend = TestBackend::new(70, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut tab = StatsTab {
                    pokemon: Some(&pokemon),
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
        assert!(text.contains("hp"));
        assert!(text.contains("45"));
        assert!(text.contains("speed"));
    }

    #[test]
    fn test_stats_tab_without_record_renders_nothing() {
        let backend = TestBackend::new(70, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut tab = StatsTab { pokemon: None };
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
        assert!(text.trim().is_empty());
    }
}
