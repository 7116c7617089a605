//! Record sampling
//!
//! Every strategy reads its input at most once, front to back. First-N
//! stops pulling records once it has enough; reservoir sampling holds at
//! most `n` records regardless of stream length.

use rand::Rng;

use super::config::SamplingConfig;

/// Keep the first `n` items and stop consuming the source
pub fn first_n<I: Iterator>(records: I, n: usize) -> std::iter::Take<I> {
    records.take(n)
}

/// Uniform random sample of `min(n, total)` items in a single pass
///
/// The first `n` items fill the reservoir. The `i`-th item after that
/// (counting from 1 at the start of the stream) replaces a uniformly chosen
/// slot with probability `n / i`, so every item ends up in the sample with
/// probability `n / total`. The sample is not in input order.
pub fn reservoir_sample<I, R>(records: I, n: usize, rng: &mut R) -> Vec<I::Item>
where
    I: Iterator,
    R: Rng,
{
    if n == 0 {
        return Vec::new();
    }

    let mut reservoir = Vec::with_capacity(n.min(1024));
    for (i, record) in (1usize..).zip(records) {
        if i <= n {
            reservoir.push(record);
        } else if rng.random::<f64>() < n as f64 / i as f64 {
            let slot = rng.random_range(0..n);
            reservoir[slot] = record;
        }
    }
    reservoir
}

/// Keeps each item independently when a uniform `[0, 1)` draw is `<= p`
///
/// The number of items kept is random with expectation `p * total`.
pub struct PercentageSample<'r, I, R> {
    records: I,
    p: f64,
    rng: &'r mut R,
}

impl<'r, I, R> PercentageSample<'r, I, R> {
    pub fn new(records: I, p: f64, rng: &'r mut R) -> Self {
        Self { records, p, rng }
    }
}

impl<I, R> Iterator for PercentageSample<'_, I, R>
where
    I: Iterator,
    R: Rng,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            if self.rng.random::<f64>() <= self.p {
                return Some(record);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

/// Records selected by a [`SamplingConfig`]
pub enum Sampled<'r, I: Iterator, R> {
    Population(I),
    FirstN(std::iter::Take<I>),
    Reservoir(std::vec::IntoIter<I::Item>),
    Percentage(PercentageSample<'r, I, R>),
}

impl<I, R> Iterator for Sampled<'_, I, R>
where
    I: Iterator,
    R: Rng,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Sampled::Population(it) => it.next(),
            Sampled::FirstN(it) => it.next(),
            Sampled::Reservoir(it) => it.next(),
            Sampled::Percentage(it) => it.next(),
        }
    }
}

/// Apply a sampling style to a record stream
///
/// Reservoir sampling drains the source before the first item is returned;
/// the other styles are lazy.
pub fn sample<'r, I, R>(records: I, config: &SamplingConfig, rng: &'r mut R) -> Sampled<'r, I, R>
where
    I: Iterator,
    R: Rng,
{
    match *config {
        SamplingConfig::FullPopulation => Sampled::Population(records),
        SamplingConfig::FirstN { n } => Sampled::FirstN(first_n(records, n)),
        SamplingConfig::Reservoir { n } => {
            Sampled::Reservoir(reservoir_sample(records, n, rng).into_iter())
        }
        SamplingConfig::RandomPercentage { p } => {
            Sampled::Percentage(PercentageSample::new(records, p, rng))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_first_n_short_circuits() {
        let mut pulled = 0;
        let taken: Vec<_> = first_n((0..100).inspect(|_| pulled += 1), 5).collect();
        assert_eq!(taken, vec![0, 1, 2, 3, 4]);
        assert_eq!(pulled, 5);
    }

    #[test]
    fn test_first_n_underrun() {
        let taken: Vec<_> = first_n(0..3, 10).collect();
        assert_eq!(taken, vec![0, 1, 2]);
    }

    #[test]
    fn test_reservoir_sizes() {
        let mut rng = rng();
        assert_eq!(reservoir_sample(0..10_000, 100, &mut rng).len(), 100);
        assert_eq!(reservoir_sample(0..3, 1000, &mut rng).len(), 3);
        assert_eq!(reservoir_sample(0..3, 3, &mut rng).len(), 3);
        assert!(reservoir_sample(0..50, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_reservoir_underrun_is_whole_population() {
        let mut sample = reservoir_sample(0..5, 8, &mut rng());
        sample.sort();
        assert_eq!(sample, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reservoir_replaces_slots() {
        let sample = reservoir_sample(0..10_000, 10, &mut rng());
        assert!(sample.iter().any(|&x| x >= 10));
    }

    #[test]
    fn test_reservoir_has_no_duplicates() {
        let mut sample = reservoir_sample(0..1000, 50, &mut rng());
        sample.sort();
        sample.dedup();
        assert_eq!(sample.len(), 50);
    }

    #[test]
    fn test_reservoir_inclusion_is_uniform() {
        const TOTAL: usize = 20;
        const N: usize = 5;
        const TRIALS: usize = 20_000;

        let mut rng = rng();
        let mut hits = [0usize; TOTAL];
        for _ in 0..TRIALS {
            for x in reservoir_sample(0..TOTAL, N, &mut rng) {
                hits[x] += 1;
            }
        }

        let expected = TRIALS as f64 * N as f64 / TOTAL as f64;
        for (record, &count) in hits.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "record {record} sampled {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn test_percentage_extremes() {
        let mut rng = rng();
        assert_eq!(PercentageSample::new(0..500, 1.0, &mut rng).count(), 500);
        assert_eq!(PercentageSample::new(0..500, 0.0, &mut rng).count(), 0);
    }

    #[test]
    fn test_percentage_expected_size() {
        let kept = PercentageSample::new(0..10_000, 0.25, &mut rng()).count();
        assert!((2_200..2_800).contains(&kept), "kept {kept}");
    }

    #[test]
    fn test_percentage_preserves_order() {
        let kept: Vec<_> = PercentageSample::new(0..1000, 0.5, &mut rng()).collect();
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_dispatch() {
        let mut rng = rng();
        let population: Vec<_> = sample(0..4, &SamplingConfig::FullPopulation, &mut rng).collect();
        assert_eq!(population, vec![0, 1, 2, 3]);

        let first = sample(0..10, &SamplingConfig::FirstN { n: 2 }, &mut rng).count();
        assert_eq!(first, 2);

        let reservoir = sample(0..10, &SamplingConfig::Reservoir { n: 4 }, &mut rng).count();
        assert_eq!(reservoir, 4);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = reservoir_sample(0..1000, 10, &mut StdRng::seed_from_u64(99));
        let b = reservoir_sample(0..1000, 10, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
