//! Plain-text summary for a terminal or log file.

use std::io::{self, Stdout, Write};

use crate::{Histogram, OutputResult, ReportSink, RunReport};

/// Writes mean wait times, and optionally histograms of both wait sequences,
/// to any [`Write`].
pub struct ConsoleSink<W: Write> {
    out:  W,
    bins: Option<usize>,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, bins: None }
    }

    /// Follow the means with `bins`-bin histograms of both wait sequences.
    pub fn with_histograms(mut self, bins: usize) -> Self {
        self.bins = Some(bins);
        self
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn histogram(&mut self, title: &str, samples: &[u64], bins: usize) -> io::Result<()> {
        if let Some(h) = Histogram::new(samples, bins) {
            writeln!(self.out)?;
            writeln!(self.out, "{title} (ticks → people)")?;
            write!(self.out, "{h}")?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn report(&mut self, report: &RunReport<'_>) -> OutputResult<()> {
        let Some(s) = report.summary else {
            writeln!(self.out, "No passenger reached their floor; no wait times to report.")?;
            self.out.flush()?;
            return Ok(());
        };

        writeln!(self.out, "Mean waiting for elevator time: {:.3}", s.mean_floor_wait)?;
        writeln!(self.out, "Mean waiting on elevator time : {:.3}", s.mean_elevator_wait)?;
        writeln!(self.out, "Mean total wait time          : {:.3}", s.mean_total_wait)?;

        if let Some(bins) = self.bins {
            self.histogram("Time spent waiting for elevator", report.floor_waits, bins)?;
            self.histogram("Time spent waiting on elevator", report.elevator_waits, bins)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
