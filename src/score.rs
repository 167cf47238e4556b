//! Score breakdown types.

use core::fmt;

/// A scoring category of the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Two points per card combination totalling fifteen.
    Fifteens,
    /// Two points per pair of equal rank.
    Pairs,
    /// One point per card in each run of three or more.
    Runs,
    /// Points for cards of a single suit.
    Flush,
    /// One point for the jack matching the starter's suit.
    Nobs,
}

impl Category {
    /// All categories, in counting order.
    pub const ALL: [Self; 5] = [
        Self::Fifteens,
        Self::Pairs,
        Self::Runs,
        Self::Flush,
        Self::Nobs,
    ];

    /// Returns the lowercase category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifteens => "fifteens",
            Self::Pairs => "pairs",
            Self::Runs => "runs",
            Self::Flush => "flush",
            Self::Nobs => "nobs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Points scored by a hand, split by category.
///
/// Every category is always present; a category that scored nothing holds 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreBreakdown {
    /// Points from fifteens.
    pub fifteens: u8,
    /// Points from pairs.
    pub pairs: u8,
    /// Points from runs.
    pub runs: u8,
    /// Points from a flush.
    pub flush: u8,
    /// Points from his nobs.
    pub nobs: u8,
}

impl ScoreBreakdown {
    /// Returns the points scored in one category.
    #[must_use]
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Fifteens => self.fifteens,
            Category::Pairs => self.pairs,
            Category::Runs => self.runs,
            Category::Flush => self.flush,
            Category::Nobs => self.nobs,
        }
    }

    /// Returns the sum of all categories.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.fifteens as u16
            + self.pairs as u16
            + self.runs as u16
            + self.flush as u16
            + self.nobs as u16
    }

    /// Iterates over `(category, points)` in counting order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().map(|category| (category, self.get(category)))
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total())?;
        let mut first = true;
        for (category, points) in self.iter().filter(|&(_, points)| points > 0) {
            f.write_str(if first { " (" } else { ", " })?;
            write!(f, "{category} {points}")?;
            first = false;
        }
        if !first {
            f.write_str(")")?;
        }
        Ok(())
    }
}
