//! Chart rendering.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use itertools::Itertools;
use lazy_regex::regex;
use plotters::{prelude::*, style::FontTransform};

use crate::DenseSeries;

/// Bar fill colour.
pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

#[derive(Clone, Debug)]
pub struct ChartStyle {
    /// Font family for all chart text.
    pub font: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        ChartStyle {
            font: "sans-serif".into(),
        }
    }
}

/// Draw one line with markers per label over the shared day axis.
pub fn line_chart(
    path: impl AsRef<Path>,
    data: &DenseSeries,
    style: &ChartStyle,
) -> Result<()> {
    let (Some(&first), Some(&last)) = (data.days.first(), data.days.last())
    else {
        bail!("line_chart: no days to plot");
    };
    let y_max = data
        .series
        .iter()
        .flat_map(|(_, counts)| counts.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1);
    let font = style.font.as_str();

    let root =
        BitMapBackend::new(path.as_ref(), (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Tweet Counts per Hashtag", (font, 30.0))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            first.saturating_sub(1)..last + 1,
            0u64..y_max.saturating_add(y_max / 10).saturating_add(1),
        )?;

    chart
        .configure_mesh()
        .x_desc("Day of Year")
        .y_desc("Number of Tweets")
        .label_style((font, 16.0))
        .axis_desc_style((font, 20.0))
        .draw()?;

    for (i, (label, counts)) in data.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let points: Vec<(u32, u64)> =
            data.days.iter().copied().zip(counts.iter().copied()).collect();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        chart.draw_series(
            points.iter().map(|&p| Circle::new(p, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .label_font((font, 16.0))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draw the (sub-category, value) pairs as bars from left to right.
pub fn bar_chart(
    path: impl AsRef<Path>,
    key: &str,
    items: &[(String, f64)],
    percent: bool,
    style: &ChartStyle,
) -> Result<()> {
    let y_min = items.iter().map(|(_, v)| *v).fold(0.0, f64::min);
    let y_max = items.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    let font = style.font.as_str();
    let slots = items.len().max(1);

    let root =
        BitMapBackend::new(path.as_ref(), (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Top 10 {key} Values"), (font, 30.0))
        .margin(20)
        .x_label_area_size(120)
        .y_label_area_size(80)
        .build_cartesian_2d((0..slots).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => {
                items.get(*i).map(|(sub, _)| sub.clone()).unwrap_or_default()
            }
            _ => String::new(),
        })
        .label_style((font, 14.0))
        .x_label_style(
            (font, 14.0).into_font().transform(FontTransform::Rotate90),
        )
        .x_desc(key)
        .y_desc(if percent { "Percentage" } else { "Count" })
        .axis_desc_style((font, 20.0))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(SKY_BLUE.filled())
            .margin(10)
            .data(items.iter().enumerate().map(|(i, (_, v))| (i, *v))),
    )?;

    root.present()?;
    Ok(())
}

/// Output file name for a line plot of the given hashtags.
///
/// Leading `#` characters are dropped and runs of non-word characters turn
/// into underscores, eg. `#covid-19` becomes `covid_19`.
pub fn line_chart_file_name<S: AsRef<str>>(labels: &[S]) -> PathBuf {
    let name = labels
        .iter()
        .map(|label| {
            let label = label.as_ref().trim_start_matches('#');
            regex!(r"\W+").replace_all(label, "_")
        })
        .join("_");

    format!("{name}_lineplot.png").into()
}
