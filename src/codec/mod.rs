//! Dump-text parsing into the attribute model.
//!
//! ## Key Components
//!
//! - [line::classify] / [DumpLine] - the per-line grammar
//! - [DumpAccumulator] - folds the classified line stream into records
//! - [parse_dump] / [parse_dump_with] - one-call parse entry points
//! - [DumpModel] - a parsed dump plus its grouped view, the surface display
//!   panels and export routines consume
//!
//! ## Tolerance
//!
//! Dump text is reconstructed best-effort: unrecognized lines, orphan
//! continuation lines, out-of-order repeating indices, and duplicate names
//! all degrade to drops or merges. Parsing raises no errors; the one outcome
//! callers must handle is an empty record list, which is valid data, not a
//! failure.

pub mod accumulator;
pub mod line;

pub use accumulator::{parse_dump, parse_dump_with, DumpAccumulator};
pub use line::{classify, DumpLine};

use serde::{Deserialize, Serialize};

use crate::{
    compose::{compose, AttrSection},
    config::ParseConfig,
    properties::{AttributeRecord, EntityKind},
};

/// A parsed dump: the entity kind it was parsed as plus the flat record
/// list in first-seen order.
///
/// The model is plain owned data, immutable once built; hand it freely to
/// concurrent consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpModel {
    kind: EntityKind,
    records: Vec<AttributeRecord>,
}

impl DumpModel {
    /// Parse dump text under the default [ParseConfig].
    pub fn parse(kind: EntityKind, text: &str) -> Self {
        Self::parse_with(kind, text, &ParseConfig::default())
    }

    pub fn parse_with(kind: EntityKind, text: &str, config: &ParseConfig) -> Self {
        tracing::debug!("Parsing {kind} dump ({} bytes)", text.len());
        DumpModel {
            kind,
            records: parse_dump_with(kind, text, config),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Flat record list, first-seen-by-name order.
    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<AttributeRecord> {
        self.records
    }

    /// Look one attribute up by its case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&AttributeRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// The grouped display view: sections in the kind's declared order,
    /// name-sorted within each section, empty groups omitted.
    pub fn sections(&self) -> Vec<AttrSection> {
        compose(self.kind, &self.records)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
