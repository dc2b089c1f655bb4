//! # TUI Components
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: top status line
//! - `TabBar`: detail panel selector
//! - `DetailHeader`, `AboutTab`, `StatsTab`, `EvolutionTab`: detail panels
//!
//! ### Stateful Components
//!
//! Components that wrap persistent presentation state from `TuiState`:
//! - `PokemonGrid`: card grid with selection and row scrolling
//! - `MovesTab`: scroll view over the move list
//!
//! Each component file contains everything related to that component: props,
//! rendering logic, and tests. Data flows in as props; components never
//! reach into global state.

mod title_bar;
pub use title_bar::TitleBar;

pub mod about_tab;
pub mod detail_header;
pub mod evolution_tab;
pub mod moves_tab;
pub mod pokemon_grid;
pub mod stats_tab;
pub mod tab_bar;

pub use about_tab::AboutTab;
pub use detail_header::DetailHeader;
pub use evolution_tab::EvolutionTab;
pub use moves_tab::MovesTab;
pub use pokemon_grid::{PokemonGrid, PokemonGridState};
pub use stats_tab::StatsTab;
pub use tab_bar::TabBar;
