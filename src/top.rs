//! Picking the values to show in a bar graph.

use anyhow::{bail, Result};
use itertools::Itertools;

use crate::{Mapping, SubCounts, ALL_KEY};

/// How many values a bar graph shows.
pub const TOP_N: usize = 10;

/// Sub-category values under a key.
pub fn counts(mapping: &Mapping<f64>, key: &str) -> Result<SubCounts<f64>> {
    let Some(values) = mapping.get(key) else {
        bail!("key {key:?} not found in mapping");
    };
    Ok(values.clone())
}

/// Sub-category values under a key divided by the matching totals in the
/// `_all` mapping.
pub fn percentages(
    mapping: &Mapping<f64>,
    key: &str,
) -> Result<SubCounts<f64>> {
    let values = counts(mapping, key)?;
    let Some(totals) = mapping.get(ALL_KEY) else {
        bail!("mapping has no {ALL_KEY:?} totals to normalize against");
    };

    values
        .into_iter()
        .map(|(sub, value)| {
            let Some(&total) = totals.get(&sub) else {
                bail!("{ALL_KEY:?} has no total for {sub:?}");
            };
            if total == 0.0 {
                bail!("division by zero, {ALL_KEY:?} total for {sub:?} is 0");
            }
            Ok((sub, value / total))
        })
        .collect()
}

/// The `n` largest values in ascending order.
///
/// Sorts are stable, equal values stay in the order they have in the
/// mapping.
pub fn top_values(values: &SubCounts<f64>, n: usize) -> Vec<(String, f64)> {
    values
        .iter()
        .map(|(sub, &value)| (sub.clone(), value))
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .take(n)
        .sorted_by(|a, b| a.1.total_cmp(&b.1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(s: &str) -> Mapping<f64> {
        s.parse().unwrap()
    }

    #[test]
    fn test_counts() {
        let m = mapping(r##"{"#a": {"en": 2, "ko": 1}}"##);
        let values = counts(&m, "#a").unwrap();
        assert_eq!(values.get("en"), Some(&2.0));
        assert_eq!(values.get("ko"), Some(&1.0));

        let err = counts(&m, "#b").unwrap_err();
        assert_eq!(err.to_string(), r##"key "#b" not found in mapping"##);
    }

    #[test]
    fn test_percentages() {
        let m = mapping(r##"{"key": {"a": 2, "b": 3}, "_all": {"a": 8, "b": 4}}"##);
        let values = percentages(&m, "key").unwrap();
        assert_eq!(values.get("a"), Some(&0.25));
        assert_eq!(values.get("b"), Some(&0.75));
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_percentages_fail() {
        // No _all mapping.
        assert!(percentages(&mapping(r##"{"key": {"a": 2}}"##), "key").is_err());
        // Sub-category missing from _all.
        assert!(percentages(
            &mapping(r##"{"key": {"a": 2, "b": 1}, "_all": {"a": 8}}"##),
            "key"
        )
        .is_err());
        // Zero total.
        assert!(percentages(
            &mapping(r##"{"key": {"a": 2}, "_all": {"a": 0}}"##),
            "key"
        )
        .is_err());
        // Missing key.
        assert!(percentages(&mapping(r##"{"_all": {"a": 8}}"##), "key").is_err());
    }

    #[test]
    fn test_top_values() {
        let values: SubCounts<f64> = (0..15)
            .map(|i| (format!("s{i}"), ((i * 7) % 15) as f64))
            .collect();

        let top = top_values(&values, TOP_N);
        assert_eq!(top.len(), 10);

        let picked: Vec<f64> = top.iter().map(|(_, v)| *v).collect();
        assert_eq!(picked, (5..15).map(|v| v as f64).collect::<Vec<_>>());

        for (sub, value) in &top {
            assert_eq!(values[sub], *value);
        }
    }

    #[test]
    fn test_top_values_short() {
        let values: SubCounts<f64> =
            [("a".to_string(), 3.0), ("b".to_string(), 1.0)]
                .into_iter()
                .collect();
        assert_eq!(
            top_values(&values, TOP_N),
            vec![("b".to_string(), 1.0), ("a".to_string(), 3.0)]
        );
        assert!(top_values(&SubCounts::new(), TOP_N).is_empty());
    }

    #[test]
    fn test_top_values_ties() {
        let values: SubCounts<f64> = [("x", 1.0), ("y", 2.0), ("z", 1.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        // The tie for the last slot goes to the earlier item.
        let top = top_values(&values, 2);
        assert_eq!(top, vec![("x".to_string(), 1.0), ("y".to_string(), 2.0)]);

        let top = top_values(&values, 3);
        let names: Vec<&str> = top.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["x", "z", "y"]);
    }
}
