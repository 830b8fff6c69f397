//! truecity prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::config::SelectorConfig;
pub use crate::controller::{CascadeController, FetchRequest, Widgets};
pub use crate::error::{ConfigError, DataLoadError, Result, TrueCityError, ValidationError};
pub use crate::messages::{MessageKey, Messages};
pub use crate::modal::{SaveOutcome, SelectorModal};
pub use crate::model::{Entry, Level, LocationOption, Selection, StoredValue};
pub use crate::serializer::{commit, seed, Committed};
pub use crate::session::CascadeSession;
#[cfg(feature = "http")]
pub use crate::source::HttpSource;
pub use crate::source::{DirSource, LocationSource, MemorySource};
pub use crate::widget::{Feedback, MemorySelect, RecordingFeedback, SelectList, TracingFeedback};
