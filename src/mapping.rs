use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result};
use derive_more::Deref;
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize};

/// Reserved top-level key holding the per-sub-category totals.
pub const ALL_KEY: &str = "_all";

/// Sub-category label to count, in document order.
pub type SubCounts<T> = IndexMap<String, T>;

/// Contents of a mapping file, top-level labels to their sub-category
/// counts.
///
/// The line plot reads counts as integers, the bar graph as floats so they
/// can be normalized.
#[derive(Clone, Debug, Default, Deref, Deserialize)]
#[serde(transparent)]
pub struct Mapping<T = u64>(pub IndexMap<String, SubCounts<T>>);

impl<T: DeserializeOwned> Mapping<T> {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {path:?}"))?;
        text.parse()
            .with_context(|| format!("{path:?} is not a valid mapping file"))
    }
}

impl Mapping<u64> {
    /// Sum of all sub-category counts under a label, `None` if the label
    /// isn't in the mapping.
    ///
    /// Saturates at `u64::MAX`.
    pub fn total(&self, label: &str) -> Option<u64> {
        self.get(label)
            .map(|counts| counts.values().fold(0u64, |a, &n| a.saturating_add(n)))
    }
}

impl<T: DeserializeOwned> FromStr for Mapping<T> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
