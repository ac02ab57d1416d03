//! Accumulator shared by the criterion checks.

use std::sync::Arc;

use crate::evaluate::Outcome;
use crate::evidence::{ConfigFact, Evidence, Text, TextFact};

/// Collects positive signals (hits) and evidence problems while a check
/// runs. A check passes when it found at least one hit; otherwise it fails,
/// and any unreadable or unparseable file it consulted is reported in the
/// failure notes.
#[derive(Debug, Default)]
pub struct Signals {
    hits: Vec<String>,
    problems: Vec<String>,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn found(&self) -> bool {
        !self.hits.is_empty()
    }

    pub fn hit(&mut self, note: impl Into<String>) {
        let note = note.into();
        if !self.hits.contains(&note) {
            self.hits.push(note);
        }
    }

    pub fn into_hits(self) -> Vec<String> {
        self.hits
    }

    pub fn problem(&mut self, note: impl Into<String>) {
        let note = note.into();
        if !self.problems.contains(&note) {
            self.problems.push(note);
        }
    }

    /// Record every candidate path that exists. Returns whether any did.
    pub fn paths<S: AsRef<str>>(&mut self, evidence: &Evidence, candidates: &[S]) -> bool {
        let mut any = false;
        for c in candidates {
            if evidence.exists(c.as_ref()) {
                self.hit(c.as_ref());
                any = true;
            }
        }
        any
    }

    /// Text of a file, noting read failures.
    pub fn text(&mut self, evidence: &Evidence, rel: &str) -> Option<Arc<Text>> {
        match evidence.text(rel) {
            TextFact::Present(t) => Some(t),
            TextFact::Missing => None,
            TextFact::Unreadable(err) => {
                self.problem(format!("{} is unreadable: {}", rel, err));
                None
            }
        }
    }

    /// Parsed config, noting read and parse failures.
    pub fn config(&mut self, evidence: &Evidence, rel: &str) -> Option<Arc<serde_json::Value>> {
        match evidence.config(rel) {
            ConfigFact::Parsed(v) => Some(v),
            ConfigFact::Missing => None,
            ConfigFact::Malformed(err) => {
                self.problem(format!("{} could not be parsed: {}", rel, err));
                None
            }
        }
    }

    /// Record each file whose text contains any of `needles`.
    pub fn text_any<S: AsRef<str>>(
        &mut self,
        evidence: &Evidence,
        files: &[S],
        needles: &[&str],
    ) -> bool {
        self.text_where(evidence, files, |t| t.contains_any(needles))
    }

    /// Record each file whose text satisfies `pred`.
    pub fn text_where<S: AsRef<str>>(
        &mut self,
        evidence: &Evidence,
        files: &[S],
        pred: impl Fn(&Text) -> bool,
    ) -> bool {
        let mut any = false;
        for f in files {
            let f = f.as_ref();
            if let Some(text) = self.text(evidence, f) {
                if pred(&*text) {
                    self.hit(f);
                    any = true;
                }
            }
        }
        any
    }

    /// Record each CI definition containing any of `needles`.
    pub fn ci_any(&mut self, evidence: &Evidence, needles: &[&str]) -> bool {
        let files = evidence.ci_files();
        self.text_any(evidence, &files, needles)
    }

    /// Record each CI definition satisfying `pred`.
    pub fn ci_where(&mut self, evidence: &Evidence, pred: impl Fn(&Text) -> bool) -> bool {
        let files = evidence.ci_files();
        self.text_where(evidence, &files, pred)
    }

    /// Finish the check: Pass with the hits, or Fail with any problems
    /// appended to the reason.
    pub fn finish(self, pass_reason: &str, fail_reason: &str) -> Outcome {
        if self.found() {
            return Outcome::pass(pass_reason, self.hits);
        }
        if self.problems.is_empty() {
            Outcome::fail(fail_reason)
        } else {
            Outcome::Fail {
                reason: format!("{} ({})", fail_reason, self.problems.join("; ")),
                evidence: self.problems,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepoConfig;
    use crate::evidence::ExcludeSet;
    use std::fs;
    use tempfile::TempDir;

    fn evidence(temp: &TempDir) -> Evidence {
        Evidence::new(
            temp.path(),
            ExcludeSet::from_config(&RepoConfig::default()).unwrap(),
        )
    }

    #[test]
    fn test_finish_pass_lists_hits() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "hi").unwrap();
        let ev = evidence(&temp);

        let mut s = Signals::new();
        s.paths(&ev, &["README.md", "README.rst"]);
        match s.finish("found", "missing") {
            Outcome::Pass { evidence, .. } => assert_eq!(evidence, vec!["README.md"]),
            other => panic!("expected pass, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_failure_becomes_fail_note() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ nope").unwrap();
        let ev = evidence(&temp);

        let mut s = Signals::new();
        assert!(s.config(&ev, "package.json").is_none());
        match s.finish("found", "No test script") {
            Outcome::Fail { reason, evidence } => {
                assert!(reason.starts_with("No test script ("));
                assert_eq!(evidence.len(), 1);
                assert!(evidence[0].contains("package.json could not be parsed"));
            }
            other => panic!("expected fail, got {:?}", other),
        }
    }

    #[test]
    fn test_ci_needles() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".github/workflows")).unwrap();
        fs::write(
            temp.path().join(".github/workflows/ci.yml"),
            "jobs:\n  lint:\n    run: cargo clippy\n",
        )
        .unwrap();
        let ev = evidence(&temp);

        let mut s = Signals::new();
        assert!(s.ci_any(&ev, &["clippy"]));
        assert!(!Signals::new().ci_any(&ev, &["pytest"]));
    }
}
