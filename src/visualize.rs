use std::path::PathBuf;

use anyhow::Result;
use hashtag_plots::{render, top, ChartStyle, Mapping};

pub fn run(
    input_path: PathBuf,
    key: String,
    percent: bool,
    output: PathBuf,
    style: &ChartStyle,
) -> Result<()> {
    let mapping: Mapping<f64> = Mapping::load(&input_path)?;

    let values = if percent {
        top::percentages(&mapping, &key)?
    } else {
        top::counts(&mapping, &key)?
    };
    let items = top::top_values(&values, top::TOP_N);

    render::bar_chart(&output, &key, &items, percent, style)?;
    println!("Bar graph saved as {}", output.display());
    Ok(())
}
