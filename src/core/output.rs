use csv::Writer;
use std::path::Path;
use crate::error::Result;

/// Writes the cost history as `epoch,cost` rows.
pub fn write_cost_history_csv<P: AsRef<Path>>(costs: &[f64], file_path: P) -> Result<()> {
    let mut wtr = Writer::from_path(file_path)?;
    wtr.write_record(["epoch", "cost"])?;
    for (epoch, cost) in costs.iter().enumerate() {
        wtr.write_record(&[epoch.to_string(), cost.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
