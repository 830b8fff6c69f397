//! Umbrella crate for the demos: re-exports `truecity-core`.
pub use truecity_core::*;
