//! # About Tab
//!
//! Descriptive panel: species genus, size, abilities, and breeding metadata.
//! Each value renders as soon as its backing record exists; a stage that
//! never arrived (sequence short-circuited) just leaves its rows blank.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::{Pokemon, PokemonSpecies};
use crate::tui::component::Component;

pub struct AboutTab<'a> {
    pub pokemon: Option<&'a Pokemon>,
    pub species: Option<&'a PokemonSpecies>,
}

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

impl Component for AboutTab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        if let Some(pokemon) = self.pokemon {
            let genus = self
                .species
                .map(|s| s.english_genus())
                .unwrap_or_else(|| "N/A".to_string());
            let abilities = pokemon
                .abilities
                .iter()
                .map(|a| a.ability.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            lines.push(row("Species", genus));
            lines.push(row("Height", format!("{} feet", pokemon.height)));
            lines.push(row("Weight", format!("{} lbs", pokemon.weight)));
            lines.push(row("Abilities", abilities));
        }

        if let Some(species) = self.species {
            let egg_groups = species
                .egg_groups
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let habitat = species
                .habitat
                .as_ref()
                .map(|h| h.name.clone())
                .unwrap_or_default();

            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Breeding",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(row("Gender Ratio", species.gender_rate.to_string()));
            lines.push(row("Egg Groups", egg_groups));
            lines.push(row("Habitat", habitat));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_pokemon, sample_species};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(tab: &mut AboutTab) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| tab.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_about_tab_with_both_records() {
        let pokemon = sample_pokemon("bulbasaur");
        let species = sample_species();
        let mut tab = AboutTab {
            pokemon: Some(&pokemon),
            species: Some(&species),
        };
        let text = render_to_text(&mut tab);
        assert!(text.contains("Seed"));
        assert!(text.contains("7 feet"));
        assert!(text.contains("69 lbs"));
        assert!(text.contains("overgrow, chlorophyll"));
        assert!(text.contains("Breeding"));
        assert!(text.contains("monster, plant"));
        assert!(text.contains("grassland"));
    }

    #[test]
    fn test_about_tab_species_missing_renders_entity_rows_only() {
        // Stage two failed: the detail record alone still renders.
        let pokemon = sample_pokemon("bulbasaur");
        let mut tab = AboutTab {
            pokemon: Some(&pokemon),
            species: None,
        };
        let text = render_to_text(&mut tab);
        assert!(text.contains("7 feet"));
        assert!(!text.contains("Breeding"));
        assert!(text.contains("N/A"));
    }
}
