//! rank.rs
//!
//! Maps a raw statistic to one of seven ordered tiers:
//!     D < C < B < A < S < SS < SSS
//!
//! Every statistic has its own fixed table of six inclusive cutoffs.
//! Anything below the C cutoff lands in D, so `rank` never fails.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::SSS => "SSS",
            Rank::SS => "SS",
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive lower bounds for each tier above D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankThresholds {
    pub sss: u64,
    pub ss: u64,
    pub s: u64,
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

pub const STAR_THRESHOLDS: RankThresholds = RankThresholds {
    sss: 2000,
    ss: 500,
    s: 100,
    a: 50,
    b: 20,
    c: 1,
};

pub const COMMIT_THRESHOLDS: RankThresholds = RankThresholds {
    sss: 10000,
    ss: 5000,
    s: 1000,
    a: 500,
    b: 100,
    c: 1,
};

pub const FOLLOWER_THRESHOLDS: RankThresholds = RankThresholds {
    sss: 1000,
    ss: 500,
    s: 100,
    a: 50,
    b: 20,
    c: 1,
};

impl RankThresholds {
    /// Cutoffs from the highest tier down, which is the order they are tested in.
    fn descending(&self) -> [(Rank, u64); 6] {
        [
            (Rank::SSS, self.sss),
            (Rank::SS, self.ss),
            (Rank::S, self.s),
            (Rank::A, self.a),
            (Rank::B, self.b),
            (Rank::C, self.c),
        ]
    }
}

/// Returns the highest tier whose cutoff `value` meets, or `Rank::D`.
pub fn rank(value: u64, thresholds: &RankThresholds) -> Rank {
    thresholds
        .descending()
        .into_iter()
        .find(|&(_, cutoff)| value >= cutoff)
        .map(|(tier, _)| tier)
        .unwrap_or(Rank::D)
}
