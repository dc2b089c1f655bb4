//! # Application State
//!
//! Core business state for Dexter. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn PokeSource>     // remote data source
//! ├── view: View                      // List or Detail
//! ├── entries: Vec<NamedResource>     // accumulated summary records
//! ├── next_cursor: Option<String>     // next-page locator, None = exhausted
//! ├── is_loading: bool                // a fetch is in flight for the view
//! ├── status_message: String          // status bar text
//! ├── selected_name: Option<String>   // list selection (drives preview)
//! ├── preview: Option<TypePreview>    // type badges for the selection
//! ├── detail: DetailView              // the three-step detail read model
//! └── active_tab: DetailTab           // which detail panel is shown
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{ChainLink, NamedResource, PokeSource, Pokemon, PokemonSpecies, TypeSlot};

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

/// The four tabbed panels of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    About,
    Stats,
    Evolution,
    Moves,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::About,
        DetailTab::Stats,
        DetailTab::Evolution,
        DetailTab::Moves,
    ];

    pub fn next(self) -> DetailTab {
        match self {
            DetailTab::About => DetailTab::Stats,
            DetailTab::Stats => DetailTab::Evolution,
            DetailTab::Evolution => DetailTab::Moves,
            DetailTab::Moves => DetailTab::About,
        }
    }

    pub fn prev(self) -> DetailTab {
        match self {
            DetailTab::About => DetailTab::Moves,
            DetailTab::Stats => DetailTab::About,
            DetailTab::Evolution => DetailTab::Stats,
            DetailTab::Moves => DetailTab::Evolution,
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            DetailTab::About => "About",
            DetailTab::Stats => "Base Stats",
            DetailTab::Evolution => "Evolution",
            DetailTab::Moves => "Moves",
        }
    }
}

/// Type badges fetched for the currently selected list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePreview {
    pub name: String,
    pub types: Vec<TypeSlot>,
}

/// The merged read model of the three-step detail sequence. Each field is
/// independently nullable until its fetch completes; a stage failure leaves
/// that field and all later ones unset for the life of the view.
#[derive(Debug, Default)]
pub struct DetailView {
    /// Identifier the sequence was started for. Stage results tagged with a
    /// different identifier are stale and get dropped.
    pub id: Option<String>,
    pub pokemon: Option<Pokemon>,
    pub species: Option<PokemonSpecies>,
    pub evolution: Option<ChainLink>,
}

pub struct App {
    pub source: Arc<dyn PokeSource>,
    pub view: View,
    pub entries: Vec<NamedResource>,
    pub next_cursor: Option<String>,
    pub is_loading: bool,
    pub status_message: String,
    pub selected_name: Option<String>,
    pub preview: Option<TypePreview>,
    pub detail: DetailView,
    pub active_tab: DetailTab,
}

impl App {
    pub fn new(source: Arc<dyn PokeSource>) -> Self {
        Self {
            source,
            view: View::List,
            entries: Vec::new(),
            next_cursor: None,
            is_loading: false,
            status_message: String::from("Welcome to Dexter!"),
            selected_name: None,
            preview: None,
            detail: DetailView::default(),
            active_tab: DetailTab::default(),
        }
    }
}
