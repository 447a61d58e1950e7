/*!
# Utilities

Provides a handful of helper structs and traits:
- [`NodeBitSet`](self::bitset::NodeBitSet): a fixed-size set over nodes used by traversals,
- [`GeometricJumper`](self::geometric::GeometricJumper): the skip generator behind [`G(n,p)`](crate::gens::Gnp) graphs,
- [`Probability`]: validation of probability parameters.
*/

use num::{One, Zero};

pub mod bitset;
pub mod geometric;

pub use geometric::GeometricJumper;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
