//! Decorative particle layout.
//!
//! Positions are drawn from a seeded generator so the server-rendered markup
//! and the hydrated client agree.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container
    pub left_pct: f64,
    /// Vertical position, percent of the container
    pub top_pct: f64,
    /// Animation delay in seconds
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s;",
            super::motion::css_number(self.left_pct),
            super::motion::css_number(self.top_pct),
            super::motion::css_number(self.delay)
        )
    }
}

pub const CONTACT_PARTICLES: usize = 20;
pub const CONTACT_SEED: u64 = 0x00c0_7ac7;
pub const CONTACT_MAX_DELAY: f64 = 6.0;

pub const FOOTER_PARTICLES: usize = 15;
pub const FOOTER_SEED: u64 = 0x00f0_07e2;

/// Scatter `count` particles uniformly over the container
pub fn scatter(count: usize, seed: u64, max_delay: f64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay: if max_delay > 0.0 {
                rng.gen_range(0.0..max_delay)
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_is_deterministic() {
        assert_eq!(scatter(20, 7, 6.0), scatter(20, 7, 6.0));
        assert_ne!(scatter(20, 7, 6.0), scatter(20, 8, 6.0));
    }

    #[test]
    fn test_scatter_bounds() {
        let particles = scatter(CONTACT_PARTICLES, CONTACT_SEED, CONTACT_MAX_DELAY);
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((0.0..6.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_zero_delay() {
        assert!(scatter(5, 1, 0.0).iter().all(|p| p.delay == 0.0));
        assert!(scatter(0, 1, 1.0).is_empty());
    }

    #[test]
    fn test_style() {
        let p = Particle {
            left_pct: 12.5,
            top_pct: 40.0,
            delay: 1.25,
        };
        assert_eq!(p.style(), "left: 12.5%; top: 40%; animation-delay: 1.25s;");
    }
}
