//! # covid-sidebar
//!
//! A collapsible sidebar for a COVID-19 dashboard. It shows a per-country
//! summary table and a timeline chart that can be switched between Total and
//! Live counts over a Week or a Month.
//!
//! The browser is reached only through the [`Element`], [`Chart`] and
//! [`Platform`] traits, so everything here runs outside a browser too.

mod chart;
mod content;
pub mod date;
mod dom;
mod error;
mod platform;
mod selection;
mod sidebar;
mod summary;

pub use chart::*;
pub use content::*;
pub use dom::*;
pub use error::*;
pub use platform::*;
pub use selection::*;
pub use sidebar::*;
pub use summary::*;
