//! Runs every criterion of a catalog against the collected evidence.

use tracing::debug;

use super::{Outcome, Verdict, VerdictScope};
use crate::catalog::{Catalog, Criterion, CriterionScope};
use crate::config::RepoConfig;
use crate::evidence::{Application, Evidence, Probe};

/// Evaluates a catalog, producing verdicts in catalog order. Per-app
/// criteria yield one verdict per application, in discovery order.
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Evaluator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn run(
        &self,
        evidence: &Evidence,
        config: &RepoConfig,
        apps: &[Application],
    ) -> Vec<Verdict> {
        let probe = Probe::repo(evidence, config, apps);
        let mut verdicts = Vec::new();
        for criterion in self.catalog.criteria() {
            let before = verdicts.len();
            match criterion.scope {
                CriterionScope::Repo => {
                    let outcome = (criterion.check)(&probe);
                    verdicts.push(verdict(criterion, VerdictScope::Repo, outcome));
                }
                CriterionScope::App if apps.is_empty() => {
                    verdicts.push(verdict(
                        criterion,
                        VerdictScope::Repo,
                        Outcome::not_applicable("No applications were discovered."),
                    ));
                }
                CriterionScope::App => {
                    for app in apps {
                        let outcome = (criterion.check)(&probe.for_app(app));
                        let scope = VerdictScope::App(app.path.clone());
                        verdicts.push(verdict(criterion, scope, outcome));
                    }
                }
            }
            for v in &verdicts[before..] {
                debug!(criterion = criterion.id, scope = %v.scope, status = %v.status, "evaluated");
            }
        }
        verdicts
    }
}

fn verdict(criterion: &Criterion, scope: VerdictScope, outcome: Outcome) -> Verdict {
    Verdict::from_outcome(criterion.id, criterion.pillar, criterion.level, scope, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Pillar;
    use crate::evaluate::{SkipKind, Status};
    use crate::evidence::{discover_apps, AppKind, ExcludeSet};
    use std::fs;
    use tempfile::TempDir;

    fn has_readme(p: &Probe<'_>) -> Outcome {
        if p.exists("README.md") {
            Outcome::pass("found", vec![p.path("README.md")])
        } else {
            Outcome::fail("missing")
        }
    }

    fn criterion(id: &'static str, scope: CriterionScope) -> Criterion {
        Criterion {
            id,
            title: id,
            pillar: Pillar::Documentation,
            level: 1,
            scope,
            weight: 1,
            why: "",
            remediation: "",
            requires: &[],
            scaffold: &[],
            check: has_readme,
        }
    }

    fn evidence(temp: &TempDir) -> Evidence {
        Evidence::new(
            temp.path(),
            ExcludeSet::from_config(&RepoConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_one_verdict_per_app() {
        let temp = TempDir::new().unwrap();
        for app in ["apps/api", "apps/web"] {
            fs::create_dir_all(temp.path().join(app)).unwrap();
            fs::write(temp.path().join(app).join("package.json"), "{}").unwrap();
        }
        fs::write(temp.path().join("apps/api/README.md"), "api").unwrap();

        let config = RepoConfig::default();
        let ev = evidence(&temp);
        let apps = discover_apps(&ev, &config);
        let catalog = Catalog::from_criteria(vec![
            criterion("repo_readme", CriterionScope::Repo),
            criterion("app_readme", CriterionScope::App),
        ])
        .unwrap();

        let verdicts = Evaluator::new(&catalog).run(&ev, &config, &apps);
        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].scope, VerdictScope::Repo);
        assert_eq!(verdicts[0].status, Status::Fail);
        assert_eq!(verdicts[1].scope, VerdictScope::App("apps/api".into()));
        assert_eq!(verdicts[1].status, Status::Pass);
        assert_eq!(verdicts[2].scope, VerdictScope::App("apps/web".into()));
        assert_eq!(verdicts[2].status, Status::Fail);
    }

    #[test]
    fn test_app_criterion_without_apps_is_skipped() {
        let temp = TempDir::new().unwrap();
        let config = RepoConfig::default();
        let ev = evidence(&temp);
        let catalog =
            Catalog::from_criteria(vec![criterion("app_readme", CriterionScope::App)]).unwrap();

        let verdicts = Evaluator::new(&catalog).run(&ev, &config, &[]);
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].status, Status::Skipped);
        assert_eq!(verdicts[0].skip_reason, Some(SkipKind::NotApplicable));
    }

    #[test]
    fn test_builtin_catalog_runs_on_empty_repo() {
        let temp = TempDir::new().unwrap();
        let config = RepoConfig::default();
        let ev = evidence(&temp);
        let apps = discover_apps(&ev, &config);
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].kind, AppKind::Unknown);

        let catalog = Catalog::builtin().unwrap();
        let verdicts = Evaluator::new(&catalog).run(&ev, &config, &apps);
        assert_eq!(verdicts.len(), catalog.len());
        assert!(verdicts.iter().all(|v| v.status != Status::Pass));
    }
}
