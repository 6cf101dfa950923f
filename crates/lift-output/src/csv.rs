//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `wait_samples.csv` — one row per delivered passenger
//! - `floor_trace.csv`  — the car's floor after every tick

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, ReportSink, RunReport};

/// Writes a finished run to two CSV files.
pub struct CsvSink {
    samples: Writer<File>,
    trace:   Writer<File>,
}

impl CsvSink {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut samples = Writer::from_path(dir.join("wait_samples.csv"))?;
        samples.write_record([
            "person",
            "origin",
            "destination",
            "arrival_tick",
            "departure_tick",
            "floor_wait",
            "elevator_wait",
        ])?;

        let mut trace = Writer::from_path(dir.join("floor_trace.csv"))?;
        trace.write_record(["tick", "floor"])?;

        Ok(Self { samples, trace })
    }
}

impl ReportSink for CsvSink {
    fn report(&mut self, report: &RunReport<'_>) -> OutputResult<()> {
        for d in report.departures {
            self.samples.write_record(&[
                d.person.0.to_string(),
                d.origin.0.to_string(),
                d.destination.0.to_string(),
                d.arrival_tick.0.to_string(),
                d.departure_tick.0.to_string(),
                d.floor_wait.to_string(),
                d.elevator_wait.to_string(),
            ])?;
        }
        for (tick, floor) in report.floor_trace.iter().enumerate() {
            self.trace.write_record(&[tick.to_string(), floor.0.to_string()])?;
        }
        self.samples.flush()?;
        self.trace.flush()?;
        Ok(())
    }
}
