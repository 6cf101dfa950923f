//! Equal-width text histograms of wait samples.

use std::fmt;

/// Longest bar, in characters.
const BAR_WIDTH: usize = 40;

/// Sample counts over `bins` equal-width intervals spanning `[min, max]`.
///
/// The last interval is closed so the maximum sample is counted.  When every
/// sample has the same value the span is widened to `value ± 0.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo:     f64,
    pub width:  f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// `None` if there are no samples or `bins` is zero.
    pub fn new(samples: &[u64], bins: usize) -> Option<Self> {
        if bins == 0 {
            return None;
        }
        let min = *samples.iter().min()? as f64;
        let max = *samples.iter().max()? as f64;
        let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0; bins];
        for &s in samples {
            let i = ((s as f64 - lo) / width) as usize;
            counts[i.min(bins - 1)] += 1;
        }
        Some(Self { lo, width, counts })
    }

    /// Lower and upper edge of bin `i`.
    pub fn edges(&self, i: usize) -> (f64, f64) {
        let lo = self.lo + self.width * i as f64;
        (lo, lo + self.width)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        for (i, &count) in self.counts.iter().enumerate() {
            let (lo, hi) = self.edges(i);
            let bar = count * BAR_WIDTH / peak;
            writeln!(f, "  {lo:>8.1} – {hi:>8.1} | {count:>6} {}", "#".repeat(bar))?;
        }
        Ok(())
    }
}
