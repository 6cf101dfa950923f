//! `lift-output` — reporting sinks for finished runs.
//!
//! A sink receives a [`RunReport`] — the summary (if any passenger was
//! delivered), both raw wait sequences, and the car's floor trace — after the
//! simulation has finished.  Sinks never touch simulation state, so a missing
//! or failing sink cannot change results.
//!
//! | Sink           | Output                                                 |
//! |----------------|--------------------------------------------------------|
//! | [`NoopSink`]   | nothing (the default)                                  |
//! | [`ConsoleSink`]| mean waits, optional text histograms                   |
//! | [`CsvSink`]    | `wait_samples.csv`, `floor_trace.csv`                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{ConsoleSink, ReportSink, RunReport};
//!
//! sim.run(&mut NoopObserver)?;
//! let report = RunReport::from_stats(&sim.stats);
//! ConsoleSink::stdout().with_histograms(10).report(&report)?;
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod histogram;
pub mod report;

#[cfg(test)]
mod tests;

pub use console::ConsoleSink;
pub use self::csv::CsvSink;
pub use error::{OutputError, OutputResult};
pub use histogram::Histogram;
pub use report::{NoopSink, ReportSink, RunReport};
