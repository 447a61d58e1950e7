/*!
# Geometric Jumps

Sampling every one of `N` independent Bernoulli trials is wasteful for small `p`.
Instead we draw the gap to the next success from a geometric distribution and jump over all
failures at once. For `p > 1/2` the roles of success and failure are swapped so that the number
of draws stays proportional to `min(p, 1 - p) * N`.
*/

use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::utils::Probability;

/// Emits the indices of successful trials in `0..stop` in increasing order.
#[derive(Debug, Copy, Clone)]
pub struct GeometricJumper {
    prob: f64,
    stop: u64,
}

impl GeometricJumper {
    /// Creates a new jumper for trials `0..u64::MAX` with success probability `prob`
    /// ** Panics if `prob` is not a valid probability **
    pub fn new(prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "invalid probability {prob}");
        Self {
            prob,
            stop: u64::MAX,
        }
    }

    /// Only emit indices smaller than `stop`
    pub fn stop_at(mut self, stop: u64) -> Self {
        self.stop = stop;
        self
    }

    /// Creates an iterator over successful trials
    pub fn iter<R: Rng>(self, rng: &mut R) -> GeometricJumperIter<'_, R> {
        let inverted = self.prob > 0.5;
        let gap_prob = if inverted { 1.0 - self.prob } else { self.prob };

        // `Geometric::new` only fails for probabilities outside of `[0, 1]`
        let distr = (gap_prob > 0.0).then(|| Geometric::new(gap_prob).ok()).flatten();

        let mut iter = GeometricJumperIter {
            rng,
            distr,
            inverted,
            stop: self.stop,
            cur: 0,
            next_skip: 0,
        };
        if inverted {
            iter.next_skip = iter.draw_gap(0);
        }
        iter
    }
}

/// Iterator returned by [`GeometricJumper::iter`]
#[derive(Debug)]
pub struct GeometricJumperIter<'a, R: Rng> {
    rng: &'a mut R,
    distr: Option<Geometric>,
    inverted: bool,
    stop: u64,
    /// Next index that has not been decided yet
    cur: u64,
    /// For inverted jumpers: the next index that is a failure
    next_skip: u64,
}

impl<R: Rng> GeometricJumperIter<'_, R> {
    /// Returns `from + gap` where `gap` is a fresh geometric sample (saturating)
    fn draw_gap(&mut self, from: u64) -> u64 {
        match self.distr {
            Some(distr) => from.saturating_add(distr.sample(self.rng)),
            None => u64::MAX,
        }
    }
}

impl<R: Rng> Iterator for GeometricJumperIter<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.inverted {
            while self.cur < self.stop && self.cur == self.next_skip {
                self.cur += 1;
                self.next_skip = self.draw_gap(self.cur);
            }
        } else {
            self.cur = self.draw_gap(self.cur);
        }

        if self.cur >= self.stop {
            self.cur = self.stop;
            return None;
        }

        self.cur += 1;
        Some(self.cur - 1)
    }
}
