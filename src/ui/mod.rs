//! Terminal presentation.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → frame String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready view model types
//! - [`renderer`]: frame assembly
//! - [`components`]: header, filter bar, table, detail, empty state, footer
//! - [`helpers`]: canvas, truncation, wrapping, match ranges
//! - [`theme`]: color themes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_plain};
pub use theme::Theme;
pub use viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, RocketInfo, RocketPanel,
    UIViewModel,
};
