//! Per-day aggregation of hashtag counts over a folder of mapping files.

use std::{
    collections::BTreeMap,
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;

use crate::{parse, Mapping};

/// Extension of the mapping files a folder scan picks up.
pub const MAPPING_EXTENSION: &str = "lang";

/// Summed counts per requested label per day of year.
#[derive(Clone, Debug, Default)]
pub struct DailyCounts(IndexMap<String, BTreeMap<u32, u64>>);

impl DailyCounts {
    /// Labels keep the order they're given in, repeats are collapsed.
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        DailyCounts(
            labels
                .into_iter()
                .map(|label| (label.into(), BTreeMap::new()))
                .collect(),
        )
    }

    /// Add the day's totals from one mapping file.
    ///
    /// The day gets recorded for every label, labels missing from the
    /// mapping add zero.
    pub fn add(&mut self, day: u32, mapping: &Mapping) {
        for (label, days) in self.0.iter_mut() {
            let count = days.entry(day).or_default();
            *count = count.saturating_add(mapping.total(label).unwrap_or(0));
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|s| s.as_str())
    }

    /// Count for a label on a day, zero if nothing was recorded.
    pub fn get(&self, label: &str, day: u32) -> u64 {
        self.0
            .get(label)
            .and_then(|days| days.get(&day))
            .copied()
            .unwrap_or(0)
    }

    /// Span from the first to the last day seen for any label.
    pub fn days(&self) -> Option<RangeInclusive<u32>> {
        let first = self.0.values().filter_map(|d| d.keys().next()).min()?;
        let last = self.0.values().filter_map(|d| d.keys().next_back()).max()?;
        Some(*first..=*last)
    }

    /// Lay the counts out over the contiguous range of observed days.
    pub fn dense(&self) -> Result<DenseSeries> {
        let Some(days) = self.days() else {
            bail!("No day information found in the mapping files for the given hashtags.");
        };

        let series = self
            .labels()
            .map(|label| {
                let row =
                    days.clone().map(|day| self.get(label, day)).collect();
                (label.to_owned(), row)
            })
            .collect();

        Ok(DenseSeries {
            days: days.collect(),
            series,
        })
    }
}

/// Named count series sharing one contiguous day axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseSeries {
    pub days: Vec<u32>,
    /// One entry per label, each the same length as `days`.
    pub series: Vec<(String, Vec<u64>)>,
}

/// List the mapping files directly under a folder in sorted order.
///
/// It's an error if there aren't any.
pub fn mapping_files(folder: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let folder = folder.as_ref();
    let not_found = || {
        format!("No mapping output files found in folder: {}", folder.display())
    };

    let mut files = Vec::new();
    for e in fs::read_dir(folder).with_context(not_found)? {
        let path = e?.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };

        if file_name.to_string_lossy().starts_with('.') {
            log::debug!("mapping_files: skipping dotfile {path:?}");
            continue;
        }

        if path.extension().is_some_and(|e| e == MAPPING_EXTENSION) {
            files.push(path);
        }
    }

    if files.is_empty() {
        bail!(not_found());
    }

    files.sort();
    Ok(files)
}

/// Aggregate daily counts for the labels from every usable mapping file in
/// the folder.
///
/// Files with irregular names, unparseable dates or invalid contents are
/// logged and skipped.
pub fn scan_folder<S: Into<String>>(
    folder: impl AsRef<Path>,
    labels: impl IntoIterator<Item = S>,
) -> Result<DailyCounts> {
    let mut counts = DailyCounts::new(labels);

    for path in mapping_files(folder)? {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let file_name = file_name.to_string_lossy();

        let Some(stamp) = parse::date_stamp(&file_name) else {
            log::debug!("scan_folder: {file_name:?} is not a mapping file name");
            continue;
        };

        let day = match parse::day_of_year(stamp) {
            Ok(day) => day,
            Err(e) => {
                log::warn!("Skipping file {file_name}: could not parse date ({e})");
                continue;
            }
        };

        let mapping: Mapping = match Mapping::load(&path) {
            Ok(mapping) => mapping,
            Err(e) => {
                log::warn!("Error loading {file_name}: {e:#}");
                continue;
            }
        };

        log::debug!("scan_folder: {file_name} is day {day}");
        counts.add(day, &mapping);
    }

    Ok(counts)
}
