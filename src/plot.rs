use crate::error::Result;
use crate::model::history::TrainingHistory;
use log::debug;
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const ACCURACY_PLOT: &str = "training_accuracy_plot.png";
pub const LOSS_PLOT: &str = "training_loss_plot.png";

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// Write the accuracy and loss curves of `history` into `dir`, creating it if needed.
/// Returns the paths of the two images.
pub fn save_history<P: AsRef<Path>>(history: &TrainingHistory, dir: P) -> Result<[PathBuf; 2]> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let accuracy_path = dir.join(ACCURACY_PLOT);
    let loss_path = dir.join(LOSS_PLOT);

    save_line_plot(
        &history.accuracy_points(),
        "Training Accuracy",
        "Accuracy",
        &accuracy_path,
    )?;
    save_line_plot(&history.loss_points(), "Training Loss", "Loss", &loss_path)?;

    debug!("Plots written to {}", dir.display());

    Ok([accuracy_path, loss_path])
}

/// Save `points` as a titled line chart with an "Epoch" x axis
pub fn save_line_plot<P: AsRef<Path>>(
    points: &[(f64, f64)],
    title: &str,
    y_desc: &str,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    // Ensure the output directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Non-finite values (a diverged loss) are left out of the curve
    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let x_range = axis_range(finite.iter().map(|&(x, _)| x), 0.0);
    let y_range = axis_range(finite.iter().map(|&(_, y)| y), 0.05);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(finite, &BLUE))?;

    root.present()?;
    Ok(())
}

/// Bounds of `values` widened by `padding` (a fraction of the span).
/// Empty or flat inputs still produce a non-empty range.
fn axis_range<I: Iterator<Item = f64>>(values: I, padding: f64) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    if min > max {
        return 0.0..1.0;
    }
    if max - min == 0.0 {
        return (min - 0.5)..(max + 0.5);
    }

    let pad = (max - min) * padding;
    (min - pad)..(max + pad)
}
