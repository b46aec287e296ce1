//! Validated collection of records.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::key::SortKey;
use crate::kind::JsonKind;
use crate::ordering::{Incomparable, compare_values, total_order};
use crate::record::Record;

static MISSING: Value = Value::Null;

/// An ordered, non-empty sequence of records that all contain the sort key.
///
/// The only way to obtain a `Dataset` is [`Dataset::from_value`], which
/// enforces both invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    key: SortKey,
    records: Vec<Record>,
}

impl Dataset {
    /// Validates a decoded JSON document against the sort key.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// the value must be an array, the array must be non-empty, and every
    /// element must be an object containing `key`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch`, `EmptyInput` or `MissingField`.
    pub fn from_value(value: Value, key: SortKey) -> DomainResult<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(DomainError::ShapeMismatch {
                    found: JsonKind::of(&other),
                });
            }
        };

        if items.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) if map.contains_key(key.as_str()) => Ok(Record::from(map)),
                _ => Err(DomainError::MissingField {
                    field: key.to_string(),
                    index,
                }),
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self { key, records })
    }

    /// Returns the sort key this dataset was validated against.
    #[must_use]
    pub const fn key(&self) -> &SortKey {
        &self.key
    }

    /// Returns the records in their original order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a dataset holds at least one record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the dataset and returns its records in ascending key order.
    ///
    /// The sort is stable: records with equal keys keep their input order.
    /// With two or more records, every key value must be of the same
    /// orderable kind.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if two key values cannot be compared.
    pub fn into_sorted(self) -> DomainResult<Vec<Record>> {
        self.check_key_kinds()?;

        let Self { key, mut records } = self;
        let mut failure: Option<Incomparable> = None;

        records.sort_by(|a, b| {
            let left = a.field(key.as_str()).unwrap_or(&MISSING);
            let right = b.field(key.as_str()).unwrap_or(&MISSING);
            compare_values(left, right).unwrap_or_else(|err| {
                failure.get_or_insert(err);
                total_order(left, right)
            })
        });

        match failure {
            Some(Incomparable { left, right }) => Err(DomainError::TypeMismatch {
                field: key.to_string(),
                left,
                right,
            }),
            None => Ok(records),
        }
    }

    fn key_value<'a>(&self, record: &'a Record) -> &'a Value {
        record.field(self.key.as_str()).unwrap_or(&MISSING)
    }

    fn check_key_kinds(&self) -> DomainResult<()> {
        let Some((head, tail)) = self.records.split_first() else {
            return Ok(());
        };
        if tail.is_empty() {
            return Ok(());
        }

        let expected = JsonKind::of(self.key_value(head));
        if !expected.is_orderable() {
            return Err(self.type_mismatch(expected, expected));
        }

        match tail
            .iter()
            .map(|record| JsonKind::of(self.key_value(record)))
            .find(|kind| *kind != expected)
        {
            Some(found) => Err(self.type_mismatch(expected, found)),
            None => Ok(()),
        }
    }

    fn type_mismatch(&self, left: JsonKind, right: JsonKind) -> DomainError {
        DomainError::TypeMismatch {
            field: self.key.to_string(),
            left,
            right,
        }
    }
}
