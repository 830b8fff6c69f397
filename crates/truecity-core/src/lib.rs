// crates/truecity-core/src/lib.rs

//! # truecity-core
//!
//! A cascading country → region → city selector, independent of any UI.
//!
//! Location data lives in static JSON files, one per country (its regions)
//! and one per region (its cities). The [`CascadeController`] keeps three
//! dependent dropdowns consistent, restores a previously stored selection,
//! and turns the final choice into a single [`StoredValue`].
//!
//! ```no_run
//! use truecity_core::prelude::*;
//!
//! # async fn run() -> truecity_core::Result<()> {
//! let config = SelectorConfig::new("field-1", "https://example.org/geo")?;
//! let lists = Widgets {
//!     country: MemorySelect::prefilled(vec![LocationOption::new("CO", "Colombia")], "CO"),
//!     region: MemorySelect::new("Select a region"),
//!     city: MemorySelect::new("Select a city"),
//! };
//! let source = HttpSource::new(config.base_url());
//! let mut session = CascadeSession::initialize(
//!     source,
//!     &config,
//!     lists,
//!     RecordingFeedback::default(),
//!     Messages::default(),
//!     None,
//! )
//! .await;
//! session.select_region("ANT").await;
//! session.select_city("20512");
//! let committed = session.commit()?;
//! println!("{} -> {}", committed.summary, committed.json());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod messages;
pub mod modal;
pub mod model;
pub mod options;
pub mod prelude;
pub mod profile;
#[doc(hidden)]
pub mod raw;
pub mod serializer;
pub mod session;
pub mod source;
pub mod text;
pub mod widget;

// Re-exports
pub use crate::config::SelectorConfig;
pub use crate::controller::{CascadeController, FetchRequest, Widgets};
pub use crate::error::{ConfigError, DataLoadError, Result, TrueCityError, ValidationError};
pub use crate::messages::{MessageKey, Messages};
pub use crate::model::{Entry, Level, LocationOption, PendingSeed, Selection, StoredPart, StoredValue};
pub use crate::serializer::Committed;
pub use crate::session::CascadeSession;
