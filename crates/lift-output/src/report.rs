//! The `ReportSink` trait and the data handed to it.

use lift_core::Floor;
use lift_sim::{Departure, StatsCollector, WaitSummary};

use crate::OutputResult;

/// Everything a sink may render, borrowed from a finished run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport<'a> {
    /// `None` when nobody was delivered, so there is nothing to average.
    pub summary:        Option<WaitSummary>,
    pub floor_waits:    &'a [u64],
    pub elevator_waits: &'a [u64],
    pub departures:     &'a [Departure],
    pub floor_trace:    &'a [Floor],
}

impl<'a> RunReport<'a> {
    pub fn from_stats(stats: &'a StatsCollector) -> Self {
        Self {
            summary:        stats.summarize().ok(),
            floor_waits:    stats.floor_waits(),
            elevator_waits: stats.elevator_waits(),
            departures:     stats.departures(),
            floor_trace:    stats.floor_trace(),
        }
    }
}

/// Trait implemented by every report backend.
pub trait ReportSink {
    fn report(&mut self, report: &RunReport<'_>) -> OutputResult<()>;
}

/// A [`ReportSink`] that discards everything.
pub struct NoopSink;

impl ReportSink for NoopSink {
    fn report(&mut self, _report: &RunReport<'_>) -> OutputResult<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn report(&mut self, report: &RunReport<'_>) -> OutputResult<()> {
        (**self).report(report)
    }
}
