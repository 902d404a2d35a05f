/// slot weights, 14^5 down to 14^0.
const WEIGHT: [i32; 6] = [537_824, 38_416, 2_744, 196, 14, 1];

/// raw packed strength, comparable across any two combinations.
pub type Strength = i32;

/// A ranked hand, summarized by six slot values packed positionally in
/// radix 14: slot 0 is the category index, the rest are the category's
/// tie-break ranks, unused slots 0.
///
/// An Ace keeps its face value 14, one past the radix. The resulting
/// digit overflow never reorders two hands (the floor of the next
/// category stays out of reach), and existing persisted strengths
/// depend on it, so the encoding is kept exactly as is.
#[derive(Debug, Clone, Copy)]
pub struct Combination {
    category: Category,
    strength: Strength,
}

impl Combination {
    pub(crate) fn pack(category: Category, slots: [u8; 6]) -> Self {
        debug_assert!(slots[0] == category.index());
        let strength = slots
            .iter()
            .zip(WEIGHT.iter())
            .map(|(&v, &w)| v as Strength * w)
            .sum();
        Self { category, strength }
    }

    pub const fn category(&self) -> Category {
        self.category
    }
    pub const fn strength(&self) -> Strength {
        self.strength
    }
}

/// equality and order are the packed strength alone; equal strengths
/// are the same hand for every purpose, including pot awards.
impl PartialEq for Combination {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}
impl Eq for Combination {}
impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl Display for Combination {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.strength)
    }
}

use super::category::Category;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
