//! # Evolution Tab
//!
//! Renders the flattened evolution tree, one line per species in ancestor
//! order, indented two columns per depth level. Non-root entries carry their
//! incoming edge's trigger annotation when the remote side supplied one.
//!
//! The flattening itself (and its depth cap) lives in `core::chain`; this
//! component only turns entries into lines. A depth overflow renders as its
//! own message instead of a tree.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::ChainLink;
use crate::core::chain::{self, ChainEntry};
use crate::tui::component::Component;

pub struct EvolutionTab<'a> {
    /// Stage-three result; `None` while pending (or after a short-circuit).
    pub chain: Option<&'a ChainLink>,
}

fn entry_line(entry: &ChainEntry) -> Line<'static> {
    let indent = "  ".repeat(entry.depth);
    let mut spans = vec![
        Span::raw(indent),
        Span::styled(
            entry.name.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(edge) = &entry.edge {
        let annotation = match edge.min_level {
            Some(level) => format!("  (Lv {level}, {})", edge.trigger),
            None => format!("  ({})", edge.trigger),
        };
        spans.push(Span::styled(annotation, Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

impl Component for EvolutionTab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(root) = self.chain else {
            return;
        };

        let lines = match chain::flatten(root) {
            Ok(entries) => entries.iter().map(entry_line).collect::<Vec<_>>(),
            Err(e) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))],
        };

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EvolutionDetail, NamedResource};
    use crate::core::chain::MAX_CHAIN_DEPTH;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn link(name: &str, children: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: NamedResource {
                name: name.to_string(),
                url: "u".to_string(),
            },
            evolves_to: children,
            evolution_details: vec![],
        }
    }

    fn render_to_lines(tab: &mut EvolutionTab) -> Vec<String> {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| tab.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_three_level_chain_renders_nested_in_ancestor_order() {
        let mut grandchild = link("venusaur", vec![]);
        grandchild.evolution_details = vec![EvolutionDetail {
            min_level: Some(32),
            trigger: NamedResource {
                name: "level-up".to_string(),
                url: "u".to_string(),
            },
        }];
        let mut child = link("ivysaur", vec![grandchild]);
        child.evolution_details = vec![EvolutionDetail {
            min_level: Some(16),
            trigger: NamedResource {
                name: "level-up".to_string(),
                url: "u".to_string(),
            },
        }];
        let root = link("bulbasaur", vec![child]);

        let mut tab = EvolutionTab { chain: Some(&root) };
        let lines = render_to_lines(&mut tab);

        assert!(lines[0].starts_with("bulbasaur"));
        assert!(lines[1].starts_with("  ivysaur"));
        assert!(lines[1].contains("(Lv 16, level-up)"));
        assert!(lines[2].starts_with("    venusaur"));
        assert!(lines[2].contains("(Lv 32, level-up)"));
    }

    fn deep_chain(stage: usize, levels: usize) -> ChainLink {
        let children = if levels == 0 {
            vec![]
        } else {
            vec![deep_chain(stage + 1, levels - 1)]
        };
        link(&format!("stage-{stage}"), children)
    }

    #[test]
    fn test_depth_overflow_renders_defined_error() {
        let root = deep_chain(0, MAX_CHAIN_DEPTH + 1);

        let mut tab = EvolutionTab { chain: Some(&root) };
        let lines = render_to_lines(&mut tab);
        assert!(lines[0].contains("evolution chain exceeds depth"));
    }

    #[test]
    fn test_pending_chain_renders_nothing() {
        let mut tab = EvolutionTab { chain: None };
        let lines = render_to_lines(&mut tab);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }
}
