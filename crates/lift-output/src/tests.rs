//! Tests for lift-output.

use lift_arrivals::ScriptedArrivals;
use lift_core::{Floor, SimConfig, Tick};
use lift_sim::{NoopObserver, Sim, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Five floors, one rider 3 → 0 (floor wait 2, ride 4) and one rider 1 → 4.
fn finished_sim() -> Sim<ScriptedArrivals> {
    let arrivals = ScriptedArrivals::new(5)
        .with(Tick(0), Floor(3), Floor(0))
        .unwrap()
        .with(Tick(10), Floor(1), Floor(4))
        .unwrap();
    let config = SimConfig { total_ticks: 20, ..SimConfig::with_floors(5) };
    let mut sim = SimBuilder::new(config, arrivals).build().unwrap();
    sim.run(&mut NoopObserver).unwrap();
    sim
}

fn idle_sim() -> Sim<ScriptedArrivals> {
    let config = SimConfig { total_ticks: 4, ..SimConfig::with_floors(5) };
    let mut sim = SimBuilder::new(config, ScriptedArrivals::new(5)).build().unwrap();
    sim.run(&mut NoopObserver).unwrap();
    sim
}

// ── Histogram ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod histogram_tests {
    use crate::Histogram;

    #[test]
    fn empty_samples_have_no_histogram() {
        assert!(Histogram::new(&[], 10).is_none());
        assert!(Histogram::new(&[1, 2], 0).is_none());
    }

    #[test]
    fn counts_cover_every_sample() {
        let samples = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let h = Histogram::new(&samples, 10).unwrap();
        assert_eq!(h.total(), samples.len());
        // The maximum lands in the last, closed bin.
        assert_eq!(h.counts[9], 2);
        assert_eq!(h.counts[0], 1);
    }

    #[test]
    fn equal_samples_share_one_bin() {
        let h = Histogram::new(&[4, 4, 4], 5).unwrap();
        assert_eq!(h.total(), 3);
        assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
        let (lo, hi) = (h.edges(0).0, h.edges(4).1);
        assert!(lo < 4.0 && hi > 4.0);
    }

    #[test]
    fn renders_one_line_per_bin() {
        let h = Histogram::new(&[1, 2, 3, 9], 4).unwrap();
        assert_eq!(h.to_string().lines().count(), 4);
    }
}

// ── Console sink ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::{ConsoleSink, ReportSink, RunReport};

    fn render(sim: &Sim<ScriptedArrivals>, bins: Option<usize>) -> String {
        let mut sink = ConsoleSink::new(Vec::new());
        if let Some(b) = bins {
            sink = sink.with_histograms(b);
        }
        sink.report(&RunReport::from_stats(&sim.stats)).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn prints_three_means() {
        let sim = finished_sim();
        let s = sim.summarize().unwrap();
        let text = render(&sim, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!("Mean waiting for elevator time: {:.3}", s.mean_floor_wait)
        );
        assert!(lines[1].starts_with("Mean waiting on elevator time : "));
        assert!(lines[2].starts_with("Mean total wait time          : "));
    }

    #[test]
    fn histograms_follow_means() {
        let text = render(&finished_sim(), Some(5));
        assert!(text.contains("Time spent waiting for elevator"));
        assert!(text.contains("Time spent waiting on elevator"));
    }

    #[test]
    fn empty_run_says_so() {
        let text = render(&idle_sim(), Some(10));
        assert!(text.starts_with("No passenger reached their floor"));
        assert!(!text.contains("Mean"));
    }
}

// ── CSV sink ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvSink;
    use crate::{ReportSink, RunReport};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvSink::new(dir.path()).unwrap();
        assert!(dir.path().join("wait_samples.csv").exists());
        assert!(dir.path().join("floor_trace.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvSink::new(dir.path()).unwrap();
        w.report(&RunReport::from_stats(&idle_sim().stats)).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("wait_samples.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["person", "origin", "destination", "arrival_tick", "departure_tick", "floor_wait", "elevator_wait"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("floor_trace.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "floor"]);
    }

    #[test]
    fn csv_rows_match_run() {
        let sim = finished_sim();
        let dir = tmp();
        let mut w = CsvSink::new(dir.path()).unwrap();
        w.report(&RunReport::from_stats(&sim.stats)).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("wait_samples.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), sim.stats.departures().len());
        assert_eq!(&rows[0][0], "0"); // person
        assert_eq!(&rows[0][1], "3"); // origin
        assert_eq!(&rows[0][2], "0"); // destination
        assert_eq!(&rows[0][5], "2"); // floor_wait
        assert_eq!(&rows[0][6], "4"); // elevator_wait

        let mut rdr2 = csv::Reader::from_path(dir.path().join("floor_trace.csv")).unwrap();
        let trace: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(trace.len(), 20);
        assert_eq!(&trace[0][0], "0");
        assert_eq!(&trace[0][1], "2");
    }
}

// ── Sink plumbing ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use super::*;
    use crate::{ConsoleSink, NoopSink, ReportSink, RunReport};

    #[test]
    fn noop_sink_accepts_any_report() {
        let sim = finished_sim();
        assert!(NoopSink.report(&RunReport::from_stats(&sim.stats)).is_ok());
        assert!(NoopSink.report(&RunReport::from_stats(&idle_sim().stats)).is_ok());
    }

    #[test]
    fn report_borrows_stats_unchanged() {
        let sim = finished_sim();
        let report = RunReport::from_stats(&sim.stats);
        assert_eq!(report.summary, sim.summarize().ok());
        assert_eq!(report.floor_trace.len(), 20);
        assert_eq!(report.floor_waits.len(), report.departures.len());
    }

    #[test]
    fn boxed_sinks_are_sinks() {
        let sim = finished_sim();
        let mut sinks: Vec<Box<dyn ReportSink>> =
            vec![Box::new(NoopSink), Box::new(ConsoleSink::new(Vec::new()))];
        for sink in &mut sinks {
            sink.report(&RunReport::from_stats(&sim.stats)).unwrap();
        }
    }
}
