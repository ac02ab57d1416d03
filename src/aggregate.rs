//! Pass-rate aggregation and gated level progression.
//!
//! Rates are computed over verdicts: a per-app criterion evaluated against
//! three applications contributes three verdicts. Skipped verdicts are
//! counted but never enter a denominator.

use serde::Serialize;

use crate::catalog::{level_name, Pillar, MAX_LEVEL};
use crate::config::NextLevelPolicy;
use crate::evaluate::{Status, Verdict};

/// Percentage of applicable verdicts a level must pass to be satisfied.
pub const UNLOCK_THRESHOLD_PERCENT: usize = 80;

/// Pass, fail and skip counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn new(passed: usize, failed: usize, skipped: usize) -> Self {
        Self {
            passed,
            failed,
            skipped,
        }
    }

    pub fn record(&mut self, status: Status) {
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            Status::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// Passed plus failed: the rate denominator.
    pub fn applicable(&self) -> usize {
        self.passed + self.failed
    }

    pub fn rate(&self) -> PassRate {
        PassRate::of(self.passed, self.applicable())
    }

    /// Pass rate in basis points (1/100 of a percent), for exact
    /// comparisons.
    pub fn basis_points(&self) -> Option<usize> {
        let applicable = self.applicable();
        (applicable > 0).then(|| self.passed * 10_000 / applicable)
    }

    /// Whether the pass rate clears the unlock threshold. A tally with no
    /// applicable verdicts never does.
    pub fn meets_threshold(&self) -> bool {
        let applicable = self.applicable();
        applicable > 0 && self.passed * 100 >= UNLOCK_THRESHOLD_PERCENT * applicable
    }
}

/// A pass rate, or the explicit absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PassRate {
    Applicable {
        ratio: f64,
        /// Ratio as a whole percentage, rounded half up.
        percent: u32,
    },
    NotApplicable,
}

impl PassRate {
    pub fn of(passed: usize, applicable: usize) -> Self {
        if applicable == 0 {
            return PassRate::NotApplicable;
        }
        let percent = (passed * 200 + applicable) / (applicable * 2);
        PassRate::Applicable {
            ratio: passed as f64 / applicable as f64,
            percent: percent as u32,
        }
    }

    pub fn percent(&self) -> Option<u32> {
        match self {
            PassRate::Applicable { percent, .. } => Some(*percent),
            PassRate::NotApplicable => None,
        }
    }
}

impl std::fmt::Display for PassRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassRate::Applicable { percent, .. } => write!(f, "{}%", percent),
            PassRate::NotApplicable => write!(f, "n/a"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub name: &'static str,
    #[serde(flatten)]
    pub tally: Tally,
    pub rate: PassRate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelScore {
    pub level: u8,
    pub name: &'static str,
    #[serde(flatten)]
    pub tally: Tally,
    pub rate: PassRate,
    /// This level's own rate clears the threshold, regardless of lower
    /// levels.
    pub meets_threshold: bool,
}

/// Where the repository stands on the level ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progression {
    /// Highest level `L` such that levels `1..=L` all meet the threshold.
    pub level_achieved: u8,
    /// Lowest level not meeting the threshold.
    pub blocking_level: Option<u8>,
    pub next_level_target: Option<u8>,
}

/// All aggregate scores of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub pillars: Vec<PillarScore>,
    pub levels: Vec<LevelScore>,
    pub overall: Tally,
    pub overall_rate: PassRate,
    #[serde(flatten)]
    pub progression: Progression,
}

pub fn pillar_scores(verdicts: &[Verdict]) -> Vec<PillarScore> {
    Pillar::ALL
        .iter()
        .map(|&pillar| {
            let mut tally = Tally::default();
            for v in verdicts.iter().filter(|v| v.pillar == pillar) {
                tally.record(v.status);
            }
            PillarScore {
                pillar,
                name: pillar.name(),
                tally,
                rate: tally.rate(),
            }
        })
        .collect()
}

pub fn level_scores(verdicts: &[Verdict]) -> Vec<LevelScore> {
    (1..=MAX_LEVEL)
        .map(|level| {
            let mut tally = Tally::default();
            for v in verdicts.iter().filter(|v| v.level == level) {
                tally.record(v.status);
            }
            LevelScore {
                level,
                name: level_name(level),
                tally,
                rate: tally.rate(),
                meets_threshold: tally.meets_threshold(),
            }
        })
        .collect()
}

/// Gated progression over per-level threshold results, ordered from level 1.
pub fn progression(meets_threshold: &[bool], policy: NextLevelPolicy) -> Progression {
    let blocking = meets_threshold
        .iter()
        .position(|ok| !ok)
        .map(|idx| (idx + 1) as u8);
    let level_achieved = match blocking {
        Some(level) => level - 1,
        None => meets_threshold.len() as u8,
    };
    let next_level_target = blocking.map(|level| match policy {
        NextLevelPolicy::Blocking => level,
        NextLevelPolicy::AfterBlocking => (level + 1).min(MAX_LEVEL),
    });
    Progression {
        level_achieved,
        blocking_level: blocking,
        next_level_target,
    }
}

/// Aggregate verdicts into pillar, level and overall scores.
pub fn aggregate(verdicts: &[Verdict], policy: NextLevelPolicy) -> Aggregate {
    let pillars = pillar_scores(verdicts);
    let levels = level_scores(verdicts);
    let mut overall = Tally::default();
    for v in verdicts {
        overall.record(v.status);
    }
    let meets: Vec<bool> = levels.iter().map(|l| l.meets_threshold).collect();
    let progression = progression(&meets, policy);
    tracing::info!(
        level_achieved = progression.level_achieved,
        blocking_level = ?progression.blocking_level,
        "computed progression"
    );
    Aggregate {
        pillars,
        levels,
        overall,
        overall_rate: overall.rate(),
        progression,
    }
}
