use plotters::prelude::*;
use std::path::Path;
use crate::error::{NNError, Result};

/// Line chart of the training cost per epoch, written as a PNG.
pub fn plot_cost_history<P: AsRef<Path>>(costs: &[f64], filename: P) -> Result<()> {
    draw(costs, filename.as_ref()).map_err(|e| NNError::PlotError(e.to_string()))?;
    tracing::info!("Cost plot has been saved as '{}'", filename.as_ref().display());
    Ok(())
}

fn draw(costs: &[f64], filename: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if costs.is_empty() {
        return Err("no costs to plot".into());
    }
    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let epochs = costs.len();
    let finite = costs.iter().cloned().filter(|c| c.is_finite());
    let y_max = finite.clone().fold(f64::NEG_INFINITY, f64::max);
    let y_min = finite.fold(f64::INFINITY, f64::min);
    if !(y_min.is_finite() && y_max.is_finite()) {
        return Err("cost history has no finite values".into());
    }
    let pad = ((y_max - y_min) * 0.05).max(1e-6);

    let mut chart = ChartBuilder::on(&root)
        .caption("Training Cost over Epochs", ("sans-serif", 30).into_font())
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..epochs, (y_min - pad).max(0.0)..(y_max + pad))?;

    chart
        .configure_mesh()
        .x_desc("Epoch")
        .y_desc("Cost")
        .y_label_formatter(&|y| format!("{:.3}", y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            costs
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_finite())
                .map(|(epoch, &c)| (epoch, c)),
            &BLUE,
        ))?
        .label("Training cost")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_rejects_empty_history() {
        let path = std::env::temp_dir().join("irisnet_empty_plot.png");
        assert!(matches!(plot_cost_history(&[], &path), Err(NNError::PlotError(_))));
    }
}
