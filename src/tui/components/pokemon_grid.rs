//! # PokemonGrid Component
//!
//! The list view's card grid. Each accumulated summary record becomes one
//! bordered card; the selected card is highlighted and, once its type
//! preview has arrived, washed with the first type's color.
//!
//! `PokemonGrid` is a transient component (created each frame) that wraps
//! `&'a mut PokemonGridState` (persistent selection/scroll state) and the
//! accumulated entries as props. Column count depends on the render width,
//! so it is cached in the state during the render pass for the event loop's
//! left/right/up/down arithmetic.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::api::NamedResource;
use crate::core::state::TypePreview;
use crate::tui::component::Component;
use crate::tui::theme::{ColorContext, type_color};

/// Card cell geometry (border inclusive).
const CELL_WIDTH: u16 = 18;
const CELL_HEIGHT: u16 = 3;

/// Selection and scroll state for the grid.
/// Must be persisted in the parent TuiState.
pub struct PokemonGridState {
    pub selected: usize,
    /// First visible card row.
    pub scroll_row: usize,
    /// Column count from the last render pass (0 before the first frame).
    pub last_columns: usize,
}

impl Default for PokemonGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl PokemonGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_row: 0,
            last_columns: 0,
        }
    }

    /// Move the selection by a signed offset, clamped to the entry count.
    pub fn move_selection(&mut self, delta: isize, entry_count: usize) {
        if entry_count == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, entry_count as isize - 1) as usize;
    }

    /// Scroll so the selected card's row is visible in `visible_rows`.
    fn scroll_to_selected(&mut self, columns: usize, visible_rows: usize) {
        if columns == 0 || visible_rows == 0 {
            return;
        }
        let row = self.selected / columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

pub struct PokemonGrid<'a> {
    pub entries: &'a [NamedResource],
    pub preview: Option<&'a TypePreview>,
    pub state: &'a mut PokemonGridState,
}

impl Component for PokemonGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = (area.width / CELL_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;
        self.state.last_columns = columns;
        self.state.scroll_to_selected(columns, visible_rows);

        let first_index = self.state.scroll_row * columns;
        for (offset, entry) in self.entries.iter().skip(first_index).enumerate() {
            let index = first_index + offset;
            let row = offset / columns;
            if row >= visible_rows {
                break;
            }
            let col = offset % columns;
            let cell = Rect::new(
                area.x + col as u16 * CELL_WIDTH,
                area.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH.min(area.width.saturating_sub(col as u16 * CELL_WIDTH)),
                CELL_HEIGHT.min(area.height.saturating_sub(row as u16 * CELL_HEIGHT)),
            );

            let is_selected = index == self.state.selected;
            // The selected card takes its wash color from the preview once
            // that fetch has landed; every other card stays neutral.
            let wash = self
                .preview
                .filter(|p| is_selected && p.name == entry.name)
                .and_then(|p| p.types.iter().min_by_key(|t| t.slot))
                .map(|t| type_color(&t.kind.name, ColorContext::Background));

            let mut style = Style::default();
            if let Some(color) = wash {
                style = style.bg(color);
            }
            let border_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let card = Paragraph::new(entry.name.as_str())
                .style(style)
                .block(Block::bordered().border_style(border_style));
            frame.render_widget(card, cell);
        }
    }
}
