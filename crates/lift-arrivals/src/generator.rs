//! `PersonGenerator` — stochastic per-floor arrivals.

use log::debug;

use lift_core::{Floor, PersonId, SimConfig, SimRng, Tick};

use crate::{
    ArrivalProcess, ArrivalResult, Arrivals, Person, WeightedTable, exponential_countdown,
};

/// Arrival rate and destination weight for `floor`: `1 / (f² + 1)`.
///
/// Strictly positive for every representable floor.
#[inline]
pub fn floor_weight(floor: Floor) -> f64 {
    let f = f64::from(floor.0);
    1.0 / (f * f + 1.0)
}

/// Independent exponential countdown per floor, lobby-heavy.
///
/// Per tick and per floor:
///
/// ```text
/// countdown == 0 → emit 1..=max_new_people people on that floor,
///                  redraw countdown = ⌊Exp(rate)⌋ + 1
/// otherwise      → countdown -= 1
/// ```
///
/// Initial countdowns are `⌊Exp(rate)⌋` without the `+ 1`, so a floor may
/// produce arrivals on the very first tick.
#[derive(Debug, Clone)]
pub struct PersonGenerator {
    max_new_people: u32,
    rates:          Vec<f64>,
    countdowns:     Vec<u64>,
    destinations:   WeightedTable,
    next_id:        PersonId,
}

impl PersonGenerator {
    /// Validate `config` and draw each floor's first countdown from `rng`.
    pub fn new(config: &SimConfig, rng: &mut SimRng) -> ArrivalResult<Self> {
        config.validate()?;

        let rates: Vec<f64> = config.all_floors().map(floor_weight).collect();
        let destinations = WeightedTable::from_weights(rates.iter().copied())?;
        let countdowns = rates
            .iter()
            .map(|&rate| exponential_countdown(rng, rate))
            .collect::<ArrivalResult<Vec<u64>>>()?;

        Ok(Self {
            max_new_people: config.max_new_people,
            rates,
            countdowns,
            destinations,
            next_id: PersonId(0),
        })
    }

    /// Ticks left before `floor` next produces arrivals, or `None` if the
    /// building has no such floor.
    pub fn countdown(&self, floor: Floor) -> Option<u64> {
        self.countdowns.get(floor.index()).copied()
    }

    /// Draw a destination for someone boarding at `origin`.
    ///
    /// Never returns `origin`.
    pub fn sample_destination(&self, origin: Floor, rng: &mut SimRng) -> ArrivalResult<Floor> {
        let idx = self.destinations.sample_excluding(rng, origin.index())?;
        Ok(Floor(idx as u32))
    }

    fn spawn_batch(
        &mut self,
        origin: Floor,
        now:    Tick,
        rng:    &mut SimRng,
        out:    &mut Vec<Person>,
    ) -> ArrivalResult<()> {
        let count = rng.gen_range(1..=self.max_new_people);
        for _ in 0..count {
            let desired = self.sample_destination(origin, rng)?;
            out.push(Person::new(self.next_id, origin, desired, now));
            self.next_id = self.next_id.next();
        }
        Ok(())
    }
}

impl ArrivalProcess for PersonGenerator {
    fn generate(&mut self, now: Tick, rng: &mut SimRng) -> ArrivalResult<Arrivals> {
        let mut arrivals = Arrivals::default();
        for i in 0..self.countdowns.len() {
            if self.countdowns[i] > 0 {
                self.countdowns[i] -= 1;
                continue;
            }

            let origin = Floor(i as u32);
            let before = arrivals.people.len();
            self.spawn_batch(origin, now, rng, &mut arrivals.people)?;
            arrivals.requests.push(origin);
            self.countdowns[i] = exponential_countdown(rng, self.rates[i])?.saturating_add(1);

            debug!(
                "{now}: {} arrived on {origin}, next batch in {} ticks",
                arrivals.people.len() - before,
                self.countdowns[i]
            );
        }
        Ok(arrivals)
    }
}
