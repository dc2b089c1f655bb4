//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (a fetch in flight): draws every ~80ms so the title-bar
//!   spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal
//!   resize.
//!
//! ## Fetch tasks
//!
//! All I/O runs in spawned tokio tasks that report back over an `mpsc`
//! channel of Actions. The detail sequence is one task performing its three
//! dependent fetches in order, emitting a tagged action per completed stage
//! and stopping at the first failure. Tasks are never cancelled; stale
//! results are dropped by the reducer's identifier tags.

pub mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::api::{PokeClient, PokeSource};
use crate::core::action::{Action, DetailStage, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, View};
use crate::tui::components::PokemonGridState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub grid: PokemonGridState,
    pub moves_scroll: ScrollViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: PokemonGridState::new(),
            moves_scroll: ScrollViewState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn PokeSource> =
        Arc::new(PokeClient::new(config.base_url.clone(), config.page_limit));
    let mut app = App::new(source);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Kick off page one before the first frame.
    let effect = update(&mut app, Action::Refresh);
    let mut should_quit = false;
    run_effect(effect, &app, &tx, &mut should_quit);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Keep the core selection in sync with the grid cursor; a change
        // kicks off the type-preview fetch for the newly selected entry.
        if app.view == View::List
            && let Some(name) = app.entries.get(tui.grid.selected).map(|e| e.name.clone())
            && app.selected_name.as_deref() != Some(name.as_str())
        {
            let effect = update(&mut app, Action::Select(name));
            run_effect(effect, &app, &tx, &mut should_quit);
        }

        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C and 'q' always quit regardless of view
            if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                let effect = update(&mut app, Action::Quit);
                run_effect(effect, &app, &tx, &mut should_quit);
                continue;
            }

            match app.view {
                View::List => handle_list_event(&event, &mut app, &mut tui, &tx, &mut should_quit),
                View::Detail => {
                    handle_detail_event(&event, &mut app, &mut tui, &tx, &mut should_quit)
                }
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            run_effect(effect, &app, &tx, &mut should_quit);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_list_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    let columns = tui.grid.last_columns.max(1) as isize;
    let count = app.entries.len();
    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp => tui.grid.move_selection(-columns, count),
        TuiEvent::CursorDown | TuiEvent::ScrollDown => tui.grid.move_selection(columns, count),
        TuiEvent::CursorLeft => tui.grid.move_selection(-1, count),
        TuiEvent::CursorRight => tui.grid.move_selection(1, count),
        TuiEvent::LoadMore => {
            let effect = update(app, Action::LoadMore);
            run_effect(effect, app, tx, should_quit);
        }
        TuiEvent::Submit => {
            if let Some(name) = app.entries.get(tui.grid.selected).map(|e| e.name.clone()) {
                tui.moves_scroll = ScrollViewState::default();
                let effect = update(app, Action::OpenDetail(name));
                run_effect(effect, app, tx, should_quit);
            }
        }
        _ => {}
    }
}

fn handle_detail_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    should_quit: &mut bool,
) {
    match event {
        TuiEvent::Back => {
            let effect = update(app, Action::Back);
            run_effect(effect, app, tx, should_quit);
        }
        TuiEvent::NextTab | TuiEvent::CursorRight => {
            let effect = update(app, Action::NextTab);
            run_effect(effect, app, tx, should_quit);
        }
        TuiEvent::PrevTab | TuiEvent::CursorLeft => {
            let effect = update(app, Action::PrevTab);
            run_effect(effect, app, tx, should_quit);
        }
        // Scrolling only affects the moves panel's scroll view; the other
        // panels fit their area.
        TuiEvent::CursorUp | TuiEvent::ScrollUp => tui.moves_scroll.scroll_up(),
        TuiEvent::CursorDown | TuiEvent::ScrollDown => tui.moves_scroll.scroll_down(),
        TuiEvent::ScrollPageUp => tui.moves_scroll.scroll_page_up(),
        TuiEvent::ScrollPageDown => tui.moves_scroll.scroll_page_down(),
        _ => {}
    }
}

/// Performs the I/O an `update()` step asked for.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>, should_quit: &mut bool) {
    match effect {
        Effect::None => {}
        Effect::Quit => *should_quit = true,
        Effect::FetchPage(cursor) => spawn_page_fetch(app.source.clone(), cursor, tx.clone()),
        Effect::FetchDetail(id) => spawn_detail_sequence(app.source.clone(), id, tx.clone()),
        Effect::FetchPreview(name) => spawn_preview_fetch(app.source.clone(), name, tx.clone()),
    }
}

fn spawn_page_fetch(source: Arc<dyn PokeSource>, cursor: Option<String>, tx: mpsc::Sender<Action>) {
    info!("Spawning page fetch (cursor: {:?})", cursor);
    tokio::spawn(async move {
        let action = match source.page(cursor.as_deref()).await {
            Ok(page) => Action::PageLoaded(page),
            Err(e) => {
                warn!("Page fetch failed: {e}");
                Action::PageFailed
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send page result: receiver dropped");
        }
    });
}

fn spawn_preview_fetch(source: Arc<dyn PokeSource>, name: String, tx: mpsc::Sender<Action>) {
    debug!("Spawning preview fetch for {name}");
    tokio::spawn(async move {
        match source.pokemon(&name).await {
            Ok(pokemon) => {
                let action = Action::PreviewLoaded {
                    name,
                    types: pokemon.types,
                };
                if tx.send(action).is_err() {
                    warn!("Failed to send preview result: receiver dropped");
                }
            }
            // Preview is decoration; a failure only logs.
            Err(e) => warn!("Preview fetch failed for {name}: {e}"),
        }
    });
}

fn spawn_detail_sequence(source: Arc<dyn PokeSource>, id: String, tx: mpsc::Sender<Action>) {
    info!("Spawning detail sequence for {id}");
    tokio::spawn(detail_sequence(source, id, tx));
}

/// The three dependent fetches of the detail view, in strict order. Each
/// stage's output carries the locator for the next; the first failure ends
/// the sequence, so later read-model fields stay unset.
async fn detail_sequence(source: Arc<dyn PokeSource>, id: String, tx: mpsc::Sender<Action>) {
    let pokemon = match source.pokemon(&id).await {
        Ok(p) => p,
        Err(e) => {
            warn!("Detail fetch failed for {id}: {e}");
            let _ = tx.send(Action::DetailFailed {
                id,
                stage: DetailStage::Pokemon,
            });
            return;
        }
    };
    let species_url = pokemon.species.url.clone();
    if tx
        .send(Action::DetailLoaded {
            id: id.clone(),
            pokemon: Box::new(pokemon),
        })
        .is_err()
    {
        warn!("Failed to send detail result: receiver dropped");
        return;
    }

    let species = match source.species(&species_url).await {
        Ok(s) => s,
        Err(e) => {
            warn!("Species fetch failed for {id}: {e}");
            let _ = tx.send(Action::DetailFailed {
                id,
                stage: DetailStage::Species,
            });
            return;
        }
    };
    let chain_url = species.evolution_chain.url.clone();
    if tx
        .send(Action::SpeciesLoaded {
            id: id.clone(),
            species: Box::new(species),
        })
        .is_err()
    {
        warn!("Failed to send species result: receiver dropped");
        return;
    }

    match source.evolution_chain(&chain_url).await {
        Ok(chain) => {
            let _ = tx.send(Action::EvolutionLoaded {
                id,
                chain: chain.chain,
            });
        }
        Err(e) => {
            warn!("Evolution chain fetch failed for {id}: {e}");
            let _ = tx.send(Action::DetailFailed {
                id,
                stage: DetailStage::Evolution,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubSource;

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    #[tokio::test]
    async fn test_detail_sequence_emits_one_action_per_stage() {
        let source = Arc::new(StubSource::healthy());
        let (tx, rx) = mpsc::channel();

        detail_sequence(source, "bulbasaur".to_string(), tx).await;

        let actions = drain(&rx);
        assert_eq!(actions.len(), 3);
        assert!(matches!(actions[0], Action::DetailLoaded { .. }));
        assert!(matches!(actions[1], Action::SpeciesLoaded { .. }));
        assert!(matches!(actions[2], Action::EvolutionLoaded { .. }));
    }

    #[tokio::test]
    async fn test_detail_sequence_short_circuits_on_species_failure() {
        let source = Arc::new(StubSource::healthy().without_species());
        let (tx, rx) = mpsc::channel();

        detail_sequence(source, "bulbasaur".to_string(), tx).await;

        let actions = drain(&rx);
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], Action::DetailLoaded { .. }));
        assert!(matches!(
            actions[1],
            Action::DetailFailed {
                stage: DetailStage::Species,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_detail_sequence_first_stage_failure_emits_only_failure() {
        let source = Arc::new(StubSource::healthy().without_pokemon());
        let (tx, rx) = mpsc::channel();

        detail_sequence(source, "bulbasaur".to_string(), tx).await;

        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::DetailFailed {
                stage: DetailStage::Pokemon,
                ..
            }
        ));
    }
}
