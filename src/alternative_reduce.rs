use std::path::PathBuf;

use anyhow::Result;
use hashtag_plots::{render, ChartStyle};

pub fn run(
    hashtags: Vec<String>,
    input_folder: PathBuf,
    output: Option<PathBuf>,
    style: &ChartStyle,
) -> Result<()> {
    let output =
        output.unwrap_or_else(|| render::line_chart_file_name(hashtags.as_slice()));

    let counts = hashtag_plots::scan_folder(&input_folder, &hashtags)?;
    let series = counts.dense()?;
    if let Some(days) = counts.days() {
        log::info!(
            "Plotting {} hashtag(s) over days {}-{}",
            series.series.len(),
            days.start(),
            days.end()
        );
    }

    render::line_chart(&output, &series, style)?;
    println!("Line plot saved as {}", output.display());
    Ok(())
}
