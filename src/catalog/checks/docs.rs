//! Documentation checks.

use super::ROOT_DOCS;
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::Probe;

pub const README_FILES: &[&str] = &["README.md", "README.rst", "README.txt", "README"];

pub const ENV_TEMPLATES: &[&str] = &[
    ".env.example",
    ".env.template",
    ".env.sample",
    "env.example",
    "config/.env.example",
];

pub fn readme(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, README_FILES);
    s.finish("Found README.", "No README found.")
}

pub fn agents_md(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, &["AGENTS.md"]);
    s.finish("AGENTS.md found at repo root.", "No AGENTS.md found at repo root.")
}

pub fn contributing(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &["CONTRIBUTING.md", ".github/CONTRIBUTING.md", "docs/CONTRIBUTING.md"],
    );
    s.finish("CONTRIBUTING guide found.", "No CONTRIBUTING.md found.")
}

pub fn env_vars_documented(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.text_any(
        p.evidence,
        &["README.md", "AGENTS.md"],
        &["env var", "environment variable", "env_", ".env"],
    );
    s.paths(p.evidence, ENV_TEMPLATES);
    s.finish(
        "Environment variables appear documented (or a template exists).",
        "No environment variable documentation or template found.",
    )
}

pub fn docs_freshness(_: &Probe<'_>) -> Outcome {
    Outcome::non_local(
        "Documentation age needs VCS history and the current date, which are not part of the working tree.",
    )
}

pub fn doc_gen_automation(p: &Probe<'_>) -> Outcome {
    if !p.evidence.has_ci() {
        return Outcome::fail(
            "No CI configuration detected, so documentation is never built automatically.",
        );
    }
    let mut s = Signals::new();
    s.ci_any(
        p.evidence,
        &["mkdocs", "sphinx", "docusaurus", "rustdoc", "cargo doc", "typedoc", "docs"],
    );
    s.finish(
        "Docs automation signals found in CI.",
        "No documentation generation/build step found in CI.",
    )
}

pub fn service_flow_docs(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    for hit in p.evidence.glob(&[
        "**/*.mermaid",
        "**/*.mmd",
        "**/*.puml",
        "**/*.plantuml",
        "**/*.drawio",
        "**/architecture",
        "**/ARCHITECTURE.md",
    ]) {
        s.hit(hit);
    }
    s.text_any(p.evidence, ROOT_DOCS, &["architecture", "system design", "diagram", "```mermaid"]);
    s.finish(
        "Architecture/service flow documentation found.",
        "No architecture or service-flow documentation found.",
    )
}
