use crate::models::Series;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a metric series as CSV with a `label,value` header.
pub fn save_csv<P: AsRef<Path>>(series: &Series, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("label", "value"))?;
    for (label, value) in series.labels().iter().zip(series.values()) {
        wtr.serialize((label, value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a metric series as pretty JSON.
pub fn save_json<P: AsRef<Path>>(series: &Series, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(series)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
