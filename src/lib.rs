//! Charts of hashtag counts from pre-aggregated JSON mapping files.
//!
//! Mapping files map labels (hashtags) to sub-category (eg. language)
//! counts. Per-day files can be aggregated into daily totals for a line
//! plot, and a single file can be ranked for a top-10 bar graph.

pub mod aggregate;
pub use aggregate::{scan_folder, DailyCounts, DenseSeries};

mod mapping;
pub use mapping::{Mapping, SubCounts, ALL_KEY};

pub mod parse;

pub mod render;
pub use render::ChartStyle;

pub mod top;
