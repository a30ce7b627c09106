use std::error::Error;

use plotters::prelude::*;

use crate::types::{Float, Point2};

/// Plot a time series sampled every dt seconds.
pub fn plot(
    data: &[Float],
    final_time: Float,
    dt: Float,
    num_steps: usize,
    caption: &str,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    // Determine y-axis limits based on the minimum and maximum values in the data
    let min_y = data.iter().cloned().fold(Float::INFINITY, Float::min);
    let max_y = data.iter().cloned().fold(Float::NEG_INFINITY, Float::max);

    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..final_time, min_y..max_y)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(
        (0..num_steps.min(data.len())).map(|i| (i as Float * dt, data[i])),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Draw the rope as a polyline, with its anchors marked.
pub fn plot_rope(positions: &[Point2], path: &str) -> Result<(), Box<dyn Error>> {
    if positions.is_empty() {
        return Ok(());
    }
    let (min_x, max_x) = bounds(positions.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(positions.iter().map(|p| p.y));
    let margin = 0.1 * (max_x - min_x).max(max_y - min_y).max(1.);

    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Rope shape", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (min_x - margin)..(max_x + margin),
            (min_y - margin)..(max_y + margin),
        )?;

    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(positions.iter().map(|p| (p.x, p.y)), &BLUE))?;

    let ends = [positions.first(), positions.last()];
    chart.draw_series(
        ends.iter()
            .flatten()
            .map(|p| Circle::new((p.x, p.y), 4, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn bounds(values: impl Iterator<Item = Float>) -> (Float, Float) {
    values.fold((Float::INFINITY, Float::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
