//! Per-item delay offsets for groups of animated elements.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Where the stagger sequence starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerFrom {
    Start,
    End,
    /// Shuffled order, reproducible from the seed
    Random { seed: u64 },
}

/// Delay distribution across a group
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stagger {
    /// Fixed gap between consecutive items
    Each(f64),
    /// Total spread divided evenly among the items
    Amount { total: f64, from: StaggerFrom },
}

impl Stagger {
    pub const fn each(seconds: f64) -> Self {
        Stagger::Each(seconds)
    }

    pub const fn amount(total: f64, from: StaggerFrom) -> Self {
        Stagger::Amount { total, from }
    }

    /// Gap between consecutive items for a group of `count`
    pub fn gap(&self, count: usize) -> f64 {
        match *self {
            Stagger::Each(each) => each,
            Stagger::Amount { total, .. } if count > 1 => total / (count - 1) as f64,
            Stagger::Amount { .. } => 0.0,
        }
    }

    /// Time from the first item starting to the last item starting
    pub fn span(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.gap(count) * (count - 1) as f64
    }

    /// Delay for each item, indexed by the item's position in the group
    pub fn delays(&self, count: usize) -> Vec<f64> {
        let gap = self.gap(count);
        let from = match *self {
            Stagger::Each(_) => StaggerFrom::Start,
            Stagger::Amount { from, .. } => from,
        };

        let mut order: Vec<usize> = (0..count).collect();
        match from {
            StaggerFrom::Start => {}
            StaggerFrom::End => order.reverse(),
            StaggerFrom::Random { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                order.shuffle(&mut rng);
            }
        }

        // order[slot] = item index that starts in that slot
        let mut delays = vec![0.0; count];
        for (slot, item) in order.into_iter().enumerate() {
            delays[item] = gap * slot as f64;
        }
        delays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_is_linear() {
        assert_eq!(Stagger::each(0.2).delays(3), vec![0.0, 0.2, 0.4]);
        assert_eq!(Stagger::each(0.5).span(3), 1.0);
    }

    #[test]
    fn test_empty_and_single_groups() {
        assert!(Stagger::each(0.1).delays(0).is_empty());
        assert_eq!(
            Stagger::amount(2.0, StaggerFrom::Start).delays(1),
            vec![0.0]
        );
        assert_eq!(Stagger::each(0.3).span(0), 0.0);
    }

    #[test]
    fn test_amount_spreads_total() {
        let delays = Stagger::amount(2.0, StaggerFrom::Start).delays(5);
        assert_eq!(delays, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_from_end_reverses() {
        let delays = Stagger::amount(1.0, StaggerFrom::End).delays(3);
        assert_eq!(delays, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_random_is_a_reproducible_permutation() {
        let stagger = Stagger::amount(2.0, StaggerFrom::Random { seed: 7 });
        let first = stagger.delays(15);
        let second = stagger.delays(15);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected = Stagger::amount(2.0, StaggerFrom::Start).delays(15);
        assert_eq!(sorted, expected);
        assert!((sorted.last().unwrap() - 2.0).abs() < 1e-9);
    }
}
