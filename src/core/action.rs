//! # Actions
//!
//! Everything that can happen in Dexter becomes an `Action`.
//! User presses Enter on a grid entry? That's `Action::OpenDetail(name)`.
//! A page fetch resolves? That's `Action::PageLoaded(page)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the runtime should
//! perform next. No side effects here. Fetching happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on state and
//! effect. Fetch tasks log their own failures before sending a `*Failed`
//! action, so the reducer only has to clear the loading flag. Fetch errors
//! are logged and recovered, never retried, never surfaced in detail.

use std::fmt;

use crate::api::{ChainLink, Pokemon, PokemonPage, PokemonSpecies, TypeSlot};
use crate::core::state::{App, DetailView, TypePreview, View};

/// Which stage of the detail sequence an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStage {
    Pokemon,
    Species,
    Evolution,
}

impl fmt::Display for DetailStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailStage::Pokemon => write!(f, "detail"),
            DetailStage::Species => write!(f, "species"),
            DetailStage::Evolution => write!(f, "evolution chain"),
        }
    }
}

#[derive(Debug)]
pub enum Action {
    /// Fetch (or re-fetch) page one of the listing.
    Refresh,
    /// Fetch the next page. Ignored while a fetch is in flight or when the
    /// cursor is exhausted.
    LoadMore,
    /// A page fetch resolved.
    PageLoaded(PokemonPage),
    /// A page fetch failed (already logged by the fetch task).
    PageFailed,
    /// List selection moved to this entry.
    Select(String),
    /// The type preview for a selected entry resolved.
    PreviewLoaded { name: String, types: Vec<TypeSlot> },
    /// Open the detail view for an identifier, restarting the three-step
    /// sequence from scratch.
    OpenDetail(String),
    /// Stage one of the detail sequence resolved.
    DetailLoaded { id: String, pokemon: Box<Pokemon> },
    /// Stage two of the detail sequence resolved.
    SpeciesLoaded { id: String, species: Box<PokemonSpecies> },
    /// Stage three of the detail sequence resolved.
    EvolutionLoaded { id: String, chain: ChainLink },
    /// A detail stage failed; later stages never ran.
    DetailFailed { id: String, stage: DetailStage },
    /// Leave the detail view. In-flight stages are not cancelled; their
    /// results are dropped by the identifier tag.
    Back,
    NextTab,
    PrevTab,
    Quit,
}

/// I/O the runtime performs after a reducer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch a list page: `None` = page one, `Some(url)` = cursor.
    FetchPage(Option<String>),
    /// Run the three-step detail sequence for this identifier.
    FetchDetail(String),
    /// Fetch type badges for the selected entry's preview line.
    FetchPreview(String),
    Quit,
}

pub fn update(state: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh => {
            state.is_loading = true;
            Effect::FetchPage(None)
        }

        Action::LoadMore => {
            // Drop-while-in-flight: a second request during a fetch would
            // make append order non-deterministic.
            if state.is_loading {
                return Effect::None;
            }
            match state.next_cursor.clone() {
                Some(cursor) => {
                    state.is_loading = true;
                    Effect::FetchPage(Some(cursor))
                }
                None => Effect::None,
            }
        }

        Action::PageLoaded(page) => {
            state.entries.extend(page.results);
            state.next_cursor = page.next;
            state.is_loading = false;
            state.status_message = format!("{} of {} loaded", state.entries.len(), page.count);
            Effect::None
        }

        Action::PageFailed => {
            state.is_loading = false;
            Effect::None
        }

        Action::Select(name) => {
            if state.selected_name.as_deref() == Some(name.as_str()) {
                return Effect::None;
            }
            state.selected_name = Some(name.clone());
            state.preview = None;
            Effect::FetchPreview(name)
        }

        Action::PreviewLoaded { name, types } => {
            // Selection may have moved on while the fetch was in flight.
            if state.selected_name.as_deref() == Some(name.as_str()) {
                state.preview = Some(TypePreview { name, types });
            }
            Effect::None
        }

        Action::OpenDetail(name) => {
            state.view = View::Detail;
            state.active_tab = Default::default();
            state.detail = DetailView {
                id: Some(name.clone()),
                ..Default::default()
            };
            state.is_loading = true;
            state.status_message = format!("Fetching {name}...");
            Effect::FetchDetail(name)
        }

        Action::DetailLoaded { id, pokemon } => {
            if state.detail.id.as_deref() == Some(id.as_str()) {
                state.detail.pokemon = Some(*pokemon);
            }
            Effect::None
        }

        Action::SpeciesLoaded { id, species } => {
            if state.detail.id.as_deref() == Some(id.as_str()) {
                state.detail.species = Some(*species);
            }
            Effect::None
        }

        Action::EvolutionLoaded { id, chain } => {
            if state.detail.id.as_deref() == Some(id.as_str()) {
                state.detail.evolution = Some(chain);
                state.is_loading = false;
                state.status_message = format!("{id} ready");
            }
            Effect::None
        }

        Action::DetailFailed { id, stage } => {
            if state.detail.id.as_deref() == Some(id.as_str()) {
                state.is_loading = false;
                state.status_message = format!("{id}: {stage} unavailable");
            }
            Effect::None
        }

        Action::Back => {
            state.view = View::List;
            state.detail = DetailView::default();
            state.is_loading = false;
            state.status_message = format!("{} loaded", state.entries.len());
            Effect::None
        }

        Action::NextTab => {
            state.active_tab = state.active_tab.next();
            Effect::None
        }

        Action::PrevTab => {
            state.active_tab = state.active_tab.prev();
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
