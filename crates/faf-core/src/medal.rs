//! Championship medal bands
//!
//! Presentation-level rating of a score. Bands are checked top-down; the
//! first threshold the score reaches wins.

use serde::Serialize;

/// Medal band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Medal {
    /// Below 55
    Red,
    /// 55 to 69
    Yellow,
    /// 70 to 84
    Green,
    /// 85 to 94
    Bronze,
    /// 95 to 98
    Silver,
    /// 99
    Gold,
    /// A perfect 100
    Trophy,
}

impl Medal {
    /// Bands from highest to lowest
    const DESCENDING: [Medal; 7] = [
        Medal::Trophy,
        Medal::Gold,
        Medal::Silver,
        Medal::Bronze,
        Medal::Green,
        Medal::Yellow,
        Medal::Red,
    ];

    /// Rate a score
    pub fn from_score(score: u8) -> Self {
        Self::DESCENDING
            .into_iter()
            .find(|medal| score >= medal.threshold())
            .unwrap_or(Medal::Red)
    }

    /// Lowest score that earns this band
    pub fn threshold(self) -> u8 {
        match self {
            Medal::Trophy => 100,
            Medal::Gold => 99,
            Medal::Silver => 95,
            Medal::Bronze => 85,
            Medal::Green => 70,
            Medal::Yellow => 55,
            Medal::Red => 0,
        }
    }

    /// Badge shown next to the score
    pub fn emoji(self) -> &'static str {
        match self {
            Medal::Trophy => "🏆",
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
            Medal::Green => "🟢",
            Medal::Yellow => "🟡",
            Medal::Red => "🔴",
        }
    }

    /// Human-readable band name
    pub fn label(self) -> &'static str {
        match self {
            Medal::Trophy => "Trophy - Championship",
            Medal::Gold => "Gold",
            Medal::Silver => "Target 2 - Silver",
            Medal::Bronze => "Target 1 - Bronze",
            Medal::Green => "GO! - Ready for Target 1",
            Medal::Yellow => "Caution - Getting ready",
            Medal::Red => "Stop - Needs work",
        }
    }

    /// The band above this one, if any
    pub fn next(self) -> Option<Medal> {
        match self {
            Medal::Red => Some(Medal::Yellow),
            Medal::Yellow => Some(Medal::Green),
            Medal::Green => Some(Medal::Bronze),
            Medal::Bronze => Some(Medal::Silver),
            Medal::Silver => Some(Medal::Gold),
            Medal::Gold => Some(Medal::Trophy),
            Medal::Trophy => None,
        }
    }

    /// Points still needed to reach the next band
    pub fn points_to_next(score: u8) -> Option<u8> {
        Self::from_score(score)
            .next()
            .map(|next| next.threshold().saturating_sub(score))
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
