// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The loaded dataset and its month-keyed queries.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

/// A 1-based month number as it appears in the dataset.
pub type MonthKey = u32;

/// One observation: a surface temperature at a latitude, for a month.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Record {
    /// Month number, `1..=12`.
    pub month: MonthKey,
    /// Latitude in degrees, `[-90, 90]`.
    pub lat: f64,
    /// Surface temperature in °C.
    pub tas: f64,
}

/// Errors from loading a dataset.
///
/// Any failure here is fatal for the chart: there is no partial dataset and
/// no retry — the caller surfaces the error and never builds a view.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("failed to read dataset")]
    Io(#[from] std::io::Error),
    /// A row was malformed or a field failed numeric coercion.
    #[error("malformed dataset row")]
    Malformed(#[from] csv::Error),
    /// A month value fell outside `1..=12`.
    #[error("month {month} out of range 1..=12 in record {index}")]
    MonthOutOfRange {
        /// Zero-based record index.
        index: usize,
        /// The offending value.
        month: MonthKey,
    },
    /// The dataset parsed cleanly but contains no records.
    #[error("dataset contains no records")]
    Empty,
}

/// The immutable record collection, loaded once per process.
#[derive(Clone, Debug)]
pub struct DatasetStore {
    records: Vec<Record>,
    months: Vec<MonthKey>,
}

impl DatasetStore {
    /// Loads a `month,lat,tas` CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let store = Self::from_csv(csv::Reader::from_path(path)?)?;
        info!(path = %path.display(), records = store.len(), "dataset loaded");
        Ok(store)
    }

    /// Loads a `month,lat,tas` CSV stream.
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    /// Builds a store from already materialized records.
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        for (index, r) in records.iter().enumerate() {
            if !(1..=12).contains(&r.month) {
                return Err(DatasetError::MonthOutOfRange {
                    index,
                    month: r.month,
                });
            }
        }
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut months: Vec<MonthKey> = records.iter().map(|r| r.month).collect();
        months.sort_unstable();
        months.dedup();
        Ok(Self { records, months })
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let records = reader
            .deserialize()
            .collect::<Result<Vec<Record>, csv::Error>>()?;
        Self::from_records(records)
    }

    /// All records, in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty. Always `false` for a constructed store.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct month keys, ascending.
    pub fn distinct_months(&self) -> &[MonthKey] {
        &self.months
    }

    /// All records for `month`, preserving input order.
    ///
    /// An unknown month yields an empty vector, not an error.
    pub fn records_for(&self, month: MonthKey) -> Vec<Record> {
        self.records
            .iter()
            .copied()
            .filter(|r| r.month == month)
            .collect()
    }
}
