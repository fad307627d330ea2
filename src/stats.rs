use chrono::{DateTime, Utc};

use crate::rank::{COMMIT_THRESHOLDS, FOLLOWER_THRESHOLDS, Rank, RankThresholds, STAR_THRESHOLDS, rank};

/// Aggregate counts for one GitHub account.
///
/// Only stars, commits and followers become trophies. The remaining fields
/// come back in the same GraphQL response and are kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStats {
    pub total_stars: u64,
    pub total_commits: u64,
    pub total_followers: u64,
    pub total_repositories: u64,
    pub total_pull_requests: u64,
    pub total_issues: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl RawStats {
    pub fn new(total_stars: u64, total_commits: u64, total_followers: u64) -> Self {
        Self {
            total_stars,
            total_commits,
            total_followers,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Stars,
    Commits,
    Followers,
}

impl StatKind {
    /// Fixed trophy order on the card.
    pub const ALL: [StatKind; 3] = [StatKind::Stars, StatKind::Commits, StatKind::Followers];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Stars => "Stars",
            StatKind::Commits => "Commits",
            StatKind::Followers => "Followers",
        }
    }

    pub fn thresholds(self) -> &'static RankThresholds {
        match self {
            StatKind::Stars => &STAR_THRESHOLDS,
            StatKind::Commits => &COMMIT_THRESHOLDS,
            StatKind::Followers => &FOLLOWER_THRESHOLDS,
        }
    }

    fn value(self, stats: &RawStats) -> u64 {
        match self {
            StatKind::Stars => stats.total_stars,
            StatKind::Commits => stats.total_commits,
            StatKind::Followers => stats.total_followers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trophy {
    pub name: String,
    pub value: u64,
    pub rank: Rank,
}

impl Trophy {
    pub fn new(name: impl Into<String>, value: u64, rank: Rank) -> Self {
        Self {
            name: name.into(),
            value,
            rank,
        }
    }
}

/// One trophy per tracked statistic, always in `StatKind::ALL` order.
pub fn build_trophies(stats: &RawStats) -> Vec<Trophy> {
    StatKind::ALL
        .iter()
        .map(|&kind| {
            let value = kind.value(stats);
            Trophy::new(kind.label(), value, rank(value, kind.thresholds()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn top_tier_for_large_accounts() {
        let trophies = build_trophies(&RawStats::new(2500, 12000, 1200));
        let ranks: Vec<Rank> = trophies.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![Rank::SSS, Rank::SSS, Rank::SSS]);
    }

    #[test]
    fn empty_account_is_all_d() {
        let trophies = build_trophies(&RawStats::default());
        assert_eq!(
            trophies,
            vec![
                Trophy::new("Stars", 0, Rank::D),
                Trophy::new("Commits", 0, Rank::D),
                Trophy::new("Followers", 0, Rank::D),
            ]
        );
    }

    #[test]
    fn each_stat_uses_its_own_table() {
        // 600 is SS for stars and followers but only A for commits.
        let trophies = build_trophies(&RawStats::new(600, 600, 600));
        assert_eq!(trophies[0].rank, Rank::SS);
        assert_eq!(trophies[1].rank, Rank::A);
        assert_eq!(trophies[2].rank, Rank::SS);
    }
}
