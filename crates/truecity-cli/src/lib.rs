//! truecity-cli
//! ============
//!
//! Command-line interface for `truecity-core`.
//!
//! This crate primarily provides a binary (`truecity`). We include a small
//! library target so that docs render an overview page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! truecity regions CO
//! truecity cities CO ANT
//! truecity select --country CO --country-name Colombia --region ANT --city 20512
//! truecity --base https://example.org/geo regions US
//! truecity build --input countries+states+cities.json.gz --out ./geo
//! ```
//!
//! For programmatic access use the [`truecity-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
