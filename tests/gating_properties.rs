//! Property tests for level gating and rate aggregation.

use proptest::prelude::*;
use proptest::test_runner::Config;
use readycheck::aggregate::{aggregate, progression};
use readycheck::evaluate::{Outcome, Status, Verdict, VerdictScope};
use readycheck::{NextLevelPolicy, Pillar};

fn outcome(kind: u8) -> Outcome {
    match kind {
        0 => Outcome::pass("ok", Vec::new()),
        1 => Outcome::fail("missing"),
        _ => Outcome::not_applicable("n/a"),
    }
}

fn verdicts_strategy() -> impl Strategy<Value = Vec<Verdict>> {
    prop::collection::vec((1u8..=5, 0usize..8, 0u8..3), 0..80).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (level, pillar, kind))| {
                Verdict::from_outcome(
                    &format!("c{}", i),
                    Pillar::ALL[pillar],
                    level,
                    VerdictScope::Repo,
                    outcome(kind),
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn level_below_threshold_caps_achievement(verdicts in verdicts_strategy()) {
        let agg = aggregate(&verdicts, NextLevelPolicy::Blocking);
        for level in &agg.levels {
            if !level.meets_threshold {
                prop_assert!(agg.progression.level_achieved < level.level);
            }
        }
        for level in agg.levels.iter().take(agg.progression.level_achieved as usize) {
            prop_assert!(level.meets_threshold);
        }
    }

    #[test]
    fn skipped_never_in_denominator(verdicts in verdicts_strategy()) {
        let agg = aggregate(&verdicts, NextLevelPolicy::Blocking);
        for p in &agg.pillars {
            let mine: Vec<&Verdict> = verdicts.iter().filter(|v| v.pillar == p.pillar).collect();
            prop_assert_eq!(p.tally.total(), mine.len());
            let applicable = mine.iter().filter(|v| v.status != Status::Skipped).count();
            prop_assert_eq!(p.tally.applicable(), applicable);
        }
        prop_assert_eq!(agg.overall.total(), verdicts.len());
    }

    #[test]
    fn blocking_is_first_failing_level(meets in prop::collection::vec(any::<bool>(), 5)) {
        let p = progression(&meets, NextLevelPolicy::Blocking);
        match meets.iter().position(|ok| !ok) {
            Some(idx) => {
                prop_assert_eq!(p.blocking_level, Some(idx as u8 + 1));
                prop_assert_eq!(p.level_achieved, idx as u8);
                prop_assert_eq!(p.next_level_target, p.blocking_level);
            }
            None => {
                prop_assert_eq!(p.level_achieved, 5);
                prop_assert_eq!(p.blocking_level, None);
            }
        }
    }

    #[test]
    fn after_blocking_target_is_capped(meets in prop::collection::vec(any::<bool>(), 5)) {
        let p = progression(&meets, NextLevelPolicy::AfterBlocking);
        if let (Some(blocking), Some(target)) = (p.blocking_level, p.next_level_target) {
            prop_assert_eq!(target, (blocking + 1).min(5));
        }
        prop_assert_eq!(p.blocking_level.is_some(), p.next_level_target.is_some());
    }
}
