//! # repodump-core
//!
//! A Rust library for parsing repository object-dump text into a strongly
//! typed, query-able, grouped attribute model.
//!
//! ## Overview
//!
//! Repository servers describe an entity (document/object, user, group) as a
//! line-oriented textual attribute listing, a *dump*. repodump-core
//! reconstructs that text into an ordered list of
//! [`AttributeRecord`](properties::AttributeRecord)s: it merges repeating
//! values that arrive split across continuation lines (possibly out of
//! order), classifies every attribute into a semantic display group, and
//! produces the display-ordered grouped view consumed by panels and export
//! routines.
//!
//! ### Key Features
//!
//! - **Best-effort reconstruction**: malformed lines degrade to drops or
//!   merges; parsing never fails, and an empty result is a valid outcome
//! - **Repeating-value reconciliation**: indexed values merge into gap-free
//!   sequences regardless of arrival order
//! - **Data-driven categorization**: per-entity-kind rule tables, first
//!   match wins, additive to extend
//! - **Deterministic grouping**: declared per-kind section order, ordinal
//!   name sort within each section, empty sections omitted
//! - **Pure and synchronous**: a parse call is a function of its inputs with
//!   no shared state, so concurrent callers need no locking
//!
//! ## Quick Start
//!
//! ```rust
//! use repodump_core::codec::DumpModel;
//! use repodump_core::properties::EntityKind;
//!
//! let dump = "\
//! r_object_id [ID] : 0900000180000100
//! object_name : quarterly_report.docx
//! keywords[0] : finance
//! [1] : q3
//! i_vstamp [integer] : 4
//! ";
//!
//! let model = DumpModel::parse(EntityKind::Object, dump);
//! assert_eq!(model.len(), 4);
//!
//! let keywords = model.get("keywords").unwrap();
//! assert!(keywords.is_repeating());
//! assert_eq!(keywords.display_value(), "finance, q3");
//!
//! for section in model.sections() {
//!     println!("== {} ==", section.group);
//!     for record in &section.records {
//!         println!("{} = {}", record.name, record.display_value());
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! Data flows one way through a small set of components:
//!
//! - **[`codec::line`]**: classifies one line of dump text (blank,
//!   separator, continuation, attribute, noise)
//! - **[`codec::accumulator`]**: folds the classified stream into merged,
//!   ordered records
//! - **[`categorize`]**: assigns each new record its semantic group from the
//!   entity kind's rule table
//! - **[`compose`]**: arranges categorized records into the kind's declared
//!   section order
//! - **[`format`]**: renders scalar and repeating values as display text
//!
//! Transport, sessions, query execution, and rendering are collaborators
//! outside this crate: it consumes a text blob and produces plain data.
//!
//! ## Module Guide
//!
//! Start with [`codec::DumpModel`] for parsing dumps, then explore
//! [`properties`] for the building-block types. See [`config::ParseConfig`]
//! for the parse bounds and [`format`] for value rendering.

pub mod categorize;
pub mod codec;
pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod properties;

pub use error::*;
