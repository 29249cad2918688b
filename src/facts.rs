//! Multiplication facts
//!
//! Facts are phrased for speech ("3 times 4 equals 12") and rewritten for
//! the screen ("3 x 4 = 12") by swapping the two operator words.

use rand::Rng;
use std::ops::{Range, RangeInclusive};

/// Tables that can be listened to or quizzed on
pub const TABLES: RangeInclusive<u32> = 1..=12;

/// Range the random quiz draws each factor from
///
/// The upper bound is exclusive, so 12 is never asked in a random quiz.
pub const RANDOM_FACTORS: Range<u32> = 1..12;

/// A multiplication fact `left × right`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub left: u32,
    pub right: u32,
}

impl Fact {
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    pub fn product(&self) -> u32 {
        self.left * self.right
    }

    /// The expected answer, as the user has to type it
    pub fn answer(&self) -> String {
        self.product().to_string()
    }

    /// Spoken question, awaiting the product
    pub fn question(&self) -> String {
        format!("{} times {} equals ", self.left, self.right)
    }

    /// Spoken statement including the product
    pub fn statement(&self) -> String {
        format!("{} times {} equals {}", self.left, self.right, self.product())
    }
}

/// Rewrite spoken operator words as written symbols
pub fn written(spoken: &str) -> String {
    spoken.replace("times", "x").replace("equals", "=")
}

/// Parse a times table choice
///
/// Only the plain decimal strings "1" to "12" are accepted; "01" or " 3"
/// are not.
pub fn parse_table(input: &str) -> Option<u32> {
    TABLES.clone().find(|n| n.to_string() == input)
}

/// The twelve facts of a table in order: `1 × n` up to `12 × n`
pub fn table(number: u32) -> impl Iterator<Item = Fact> {
    TABLES.map(move |i| Fact::new(i, number))
}

/// Draw one random fact
pub fn random_fact<R: Rng + ?Sized>(rng: &mut R) -> Fact {
    let left = rng.gen_range(RANDOM_FACTORS);
    let right = rng.gen_range(RANDOM_FACTORS);
    Fact::new(left, right)
}

/// Draw `count` random facts
pub fn random_facts<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> impl Iterator<Item = Fact> + '_ {
    (0..count).map(move |_| random_fact(&mut *rng))
}
