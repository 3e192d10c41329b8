//! Natal placement interpretation from classical rule systems.
//!
//! Combines essential dignity, sect, sign gender and the Hayz condition into
//! a fixed-template interpretation of one body in a sign and house. Facts
//! come from any [`natal_facts::FactStore`]; everything after the lookup is
//! pure.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use natal_facts::InMemoryFactStore;
//! use natal_resolver::*;
//!
//! let resolver = Resolver::new(InMemoryFactStore::canonical());
//! let text = resolver.interpret(&ChartPlacement::new("Mars", "Libra", 7, false))?;
//! println!("{text}");
//! ```

pub mod chart;
pub mod dignity;
pub mod error;
pub mod hayz;
pub mod language;
pub mod placement;
pub mod reception;
pub mod render;
pub mod resolver;

pub use chart::{BodyPlacement, NatalChart, Topic, house_ruler, is_day_chart_from_sun_house};
pub use dignity::{Dignity, classify};
pub use error::ResolveError;
pub use hayz::{evaluate_hayz, hayz_advisory};
pub use language::{Language, ParseLanguageError};
pub use placement::ChartPlacement;
pub use reception::{ReceptionMeta, reception_tag};
pub use render::{render, render_consultation_line, render_not_found, render_paragraph};
pub use resolver::{Assessment, Resolver};
