//! Accumulation of classified dump lines into the ordered attribute list.

use std::collections::BTreeMap;

use crate::{
    categorize::categorize,
    codec::line::{classify, DumpLine},
    config::ParseConfig,
    properties::{AttrValue, AttributeRecord, EntityKind},
};

/// Folds a classified dump-line stream into the final ordered attribute
/// list.
///
/// The only state carried across lines beyond the output itself is the name
/// of the most recent attribute line, which continuation lines attach to.
/// Every anomaly the dump format produces (noise lines, orphan
/// continuations, out-of-order or duplicate indices, repeated names)
/// degrades to a drop or a best-effort merge; accumulation never fails and
/// an empty record list is a valid outcome.
///
/// An accumulator is built fresh per parse call and consumed by
/// [DumpAccumulator::finish]; no state survives between dumps.
#[derive(Debug)]
pub struct DumpAccumulator<'cfg> {
    kind: EntityKind,
    config: &'cfg ParseConfig,
    records: Vec<AttributeRecord>,
    by_name: BTreeMap<String, usize>,
    last_attribute: Option<String>,
}

impl<'cfg> DumpAccumulator<'cfg> {
    pub fn new(kind: EntityKind, config: &'cfg ParseConfig) -> Self {
        DumpAccumulator {
            kind,
            config,
            records: Vec::new(),
            by_name: BTreeMap::new(),
            last_attribute: None,
        }
    }

    /// Classify and fold one line of dump text.
    pub fn push_line(&mut self, line: &str) {
        self.push(classify(line));
    }

    /// Fold one classified line.
    pub fn push(&mut self, line: DumpLine) {
        match line {
            DumpLine::Blank | DumpLine::Separator => {}
            DumpLine::Unrecognized => {
                tracing::debug!("Dropping unrecognized dump line");
            }
            DumpLine::Attribute {
                name,
                index,
                declared_type,
                raw_value,
            } => {
                self.last_attribute = Some(name.clone());
                self.apply(name, index, declared_type.as_deref(), raw_value);
            }
            DumpLine::Continuation {
                index,
                declared_type,
                raw_value,
            } => match self.last_attribute.clone() {
                Some(name) => self.apply(name, Some(index), declared_type.as_deref(), raw_value),
                None => {
                    tracing::debug!(
                        "Dropping orphan continuation line [{index}]; no attribute precedes it"
                    );
                }
            },
        }
    }

    /// Consume the accumulator, returning records in first-seen order.
    pub fn finish(self) -> Vec<AttributeRecord> {
        self.records
    }

    fn apply(
        &mut self,
        name: String,
        index: Option<usize>,
        declared_type: Option<&str>,
        raw_value: String,
    ) {
        if let Some(index) = index {
            if index > self.config.max_repeating_index {
                tracing::warn!(
                    "Dropping {name}[{index}]: beyond the configured index cap ({})",
                    self.config.max_repeating_index
                );
                return;
            }
        }
        match self.by_name.get(&name) {
            Some(&position) => {
                let record = &mut self.records[position];
                match index {
                    Some(index) => record.value.set_index(index, raw_value),
                    None => {
                        // Duplicate non-indexed occurrence: last value wins.
                        tracing::debug!("Duplicate non-indexed attribute {name}; keeping the later value");
                        record.value.set_scalar(raw_value);
                    }
                }
                record.update_declared_type(declared_type);
            }
            None => {
                let group = categorize(self.kind, &name);
                let value = match index {
                    Some(index) => AttrValue::repeating_at(index, raw_value),
                    None => AttrValue::Scalar(Some(raw_value)),
                };
                let record = AttributeRecord::new(name.clone(), declared_type, value, group);
                self.by_name.insert(name, self.records.len());
                self.records.push(record);
            }
        }
    }
}

/// Parse one dump into its flat, first-seen-ordered attribute list using the
/// default [ParseConfig].
pub fn parse_dump(kind: EntityKind, text: &str) -> Vec<AttributeRecord> {
    parse_dump_with(kind, text, &ParseConfig::default())
}

/// Parse one dump under an explicit configuration.
///
/// A pure function of its inputs: all parse state is constructed fresh per
/// call, so concurrent invocations for different dumps are independent.
pub fn parse_dump_with(
    kind: EntityKind,
    text: &str,
    config: &ParseConfig,
) -> Vec<AttributeRecord> {
    text.lines()
        .fold(DumpAccumulator::new(kind, config), |mut accum, line| {
            accum.push_line(line);
            accum
        })
        .finish()
}
