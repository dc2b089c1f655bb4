//! # Frame Composition
//!
//! Builds each frame out of components: a one-line title bar, the view's
//! main area, and a one-line footer of key hints. The only logic here is
//! choosing what to compose; all drawing lives in `components/`.

use crate::core::state::{App, DetailTab, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AboutTab, DetailHeader, EvolutionTab, MovesTab, PokemonGrid, StatsTab, TabBar, TitleBar,
};
use crate::tui::theme::{ColorContext, type_color};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    let title = match app.view {
        View::List => format!("Dexter — Pokédex ({})", app.entries.len()),
        View::Detail => {
            let name = app.detail.id.as_deref().unwrap_or("?");
            format!("Dexter — {name}")
        }
    };
    let mut title_bar = TitleBar::new(
        title,
        app.status_message.clone(),
        app.is_loading,
        spinner_frame,
    );
    title_bar.render(frame, title_area);

    match app.view {
        View::List => {
            let mut grid = PokemonGrid {
                entries: &app.entries,
                preview: app.preview.as_ref(),
                state: &mut tui.grid,
            };
            grid.render(frame, main_area);
            draw_list_footer(frame, footer_area, app);
        }
        View::Detail => {
            draw_detail(frame, main_area, app, tui);
            frame.render_widget(
                Line::from(Span::styled(
                    "tab/←→ panel   ↑↓ scroll   esc back   q quit",
                    Style::default().fg(Color::DarkGray),
                )),
                footer_area,
            );
        }
    }
}

/// Footer for the list view: key hints plus the selected entry's type
/// preview. The load-more hint only exists while the cursor is non-null.
fn draw_list_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "↵ open   ↑↓←→ move   q quit",
        Style::default().fg(Color::DarkGray),
    )];
    if app.next_cursor.is_some() {
        spans.push(Span::styled(
            "   m more",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(preview) = &app.preview {
        spans.push(Span::raw(format!("   {}:", preview.name)));
        let mut slots: Vec<_> = preview.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        for slot in slots {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", slot.kind.name),
                Style::default()
                    .bg(type_color(&slot.kind.name, ColorContext::Badge))
                    .fg(Color::Black),
            ));
        }
    }

    frame.render_widget(Line::from(spans), area);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [header_area, tab_area, panel_area] =
        Layout::vertical([Length(4), Length(1), Min(0)]).areas(area);

    let fallback = app.detail.id.as_deref().unwrap_or("");
    let mut header = DetailHeader {
        pokemon: app.detail.pokemon.as_ref(),
        fallback_name: fallback,
    };
    header.render(frame, header_area);

    let mut tab_bar = TabBar {
        active: app.active_tab,
    };
    tab_bar.render(frame, tab_area);

    match app.active_tab {
        DetailTab::About => {
            let mut tab = AboutTab {
                pokemon: app.detail.pokemon.as_ref(),
                species: app.detail.species.as_ref(),
            };
            tab.render(frame, panel_area);
        }
        DetailTab::Stats => {
            let mut tab = StatsTab {
                pokemon: app.detail.pokemon.as_ref(),
            };
            tab.render(frame, panel_area);
        }
        DetailTab::Evolution => {
            let mut tab = EvolutionTab {
                chain: app.detail.evolution.as_ref(),
            };
            tab.render(frame, panel_area);
        }
        DetailTab::Moves => {
            let mut tab = MovesTab {
                pokemon: app.detail.pokemon.as_ref(),
                scroll_state: &mut tui.moves_scroll,
            };
            tab.render(frame, panel_area);
        }
    }
}
