//! The built-in criterion table.
//!
//! Ordered by level, then roughly by how early a team usually adopts the
//! practice. Ids are stable and appear in reports and remediation plans.

use super::checks::{build, devenv, docs, observability, quality, security, style, testing};
use super::{Criterion, CriterionScope, Pillar};

pub static BUILTIN: &[Criterion] = &[
    // Level 1: Functional
    Criterion {
        id: "readme",
        title: "README present",
        pillar: Pillar::Documentation,
        level: 1,
        scope: CriterionScope::Repo,
        weight: 5,
        why: "Agents need a single canonical starting point to understand purpose and basic commands.",
        remediation: "Add a README.md with: purpose, prerequisites, setup, build/test commands, and a quickstart.",
        requires: &[],
        scaffold: &["README.md"],
        check: docs::readme,
    },
    Criterion {
        id: "gitignore",
        title: "Git ignore is present and reasonably comprehensive",
        pillar: Pillar::SecurityGovernance,
        level: 1,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Prevents accidental commits of secrets, build artifacts, and local environment noise.",
        remediation: "Add/update .gitignore to exclude env files, IDE metadata, caches, and build outputs.",
        requires: &[],
        scaffold: &[".gitignore"],
        check: security::gitignore,
    },
    Criterion {
        id: "deps_pinned",
        title: "Dependencies are pinned (lockfiles present)",
        pillar: Pillar::BuildSystem,
        level: 1,
        scope: CriterionScope::App,
        weight: 5,
        why: "Agents need deterministic installs. Unpinned dependencies create non-reproducible failures.",
        remediation: "Commit lockfiles (e.g., package-lock.json, pnpm-lock.yaml, poetry.lock, uv.lock, go.sum, Cargo.lock).",
        requires: &[],
        scaffold: &[],
        check: build::deps_pinned,
    },
    Criterion {
        id: "lint_config",
        title: "Linter configuration exists",
        pillar: Pillar::StyleValidation,
        level: 1,
        scope: CriterionScope::App,
        weight: 5,
        why: "Linters turn many bugs into immediate feedback, reducing low-signal CI loops.",
        remediation: "Add a linter (ESLint/Biome, Ruff, golangci-lint, Clippy) and commit its config.",
        requires: &[],
        scaffold: &[],
        check: style::lint_config,
    },
    Criterion {
        id: "formatter",
        title: "Formatter configuration exists (or language-standard formatter enforced)",
        pillar: Pillar::StyleValidation,
        level: 1,
        scope: CriterionScope::App,
        weight: 4,
        why: "Formatting consistency prevents noisy diffs and reduces review friction for agent-generated changes.",
        remediation: "Add Prettier/Biome/Black/Ruff format and ensure it runs locally and in CI.",
        requires: &[],
        scaffold: &[],
        check: style::formatter,
    },
    Criterion {
        id: "type_check",
        title: "Type checking exists (or compile-time typing is inherent)",
        pillar: Pillar::StyleValidation,
        level: 1,
        scope: CriterionScope::App,
        weight: 4,
        why: "Type checking catches integration errors earlier than runtime tests.",
        remediation: "Enable TS strict mode or add mypy/pyright. Ensure type checks run in CI.",
        requires: &[],
        scaffold: &[],
        check: style::type_check,
    },
    Criterion {
        id: "unit_tests_exist",
        title: "Unit tests exist",
        pillar: Pillar::Testing,
        level: 1,
        scope: CriterionScope::App,
        weight: 5,
        why: "Unit tests are the fastest correctness signal for iterative agent work.",
        remediation: "Add a minimal unit test suite and a standard test runner (pytest/jest/go test/etc).",
        requires: &[],
        scaffold: &[],
        check: testing::unit_tests_exist,
    },
    Criterion {
        id: "unit_tests_runnable",
        title: "Unit tests are runnable via a standard command",
        pillar: Pillar::Testing,
        level: 1,
        scope: CriterionScope::App,
        weight: 4,
        why: "Agents need an obvious, repeatable command to validate behavior before committing.",
        remediation: "Document and standardize: `npm test` / `pytest` / `go test ./...` and ensure it works locally.",
        requires: &["unit_tests_exist"],
        scaffold: &[],
        check: testing::unit_tests_runnable,
    },
    Criterion {
        id: "build_cmd_doc",
        title: "Build command exists and is discoverable",
        pillar: Pillar::BuildSystem,
        level: 1,
        scope: CriterionScope::App,
        weight: 4,
        why: "Agents must be able to compile/build packages without guessing.",
        remediation: "Add a build script/target and document it in README/AGENTS (e.g., `npm run build`, `make build`).",
        requires: &[],
        scaffold: &[],
        check: build::build_cmd_doc,
    },
    // Level 2: Documented
    Criterion {
        id: "agents_md",
        title: "AGENTS.md exists (agent-facing development instructions)",
        pillar: Pillar::Documentation,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 5,
        why: "Agent-facing docs remove ambiguity: setup, commands, conventions, and 'how we work here'.",
        remediation: "Add AGENTS.md with: setup, dev loops, common tasks, repo map, and verification commands.",
        requires: &[],
        scaffold: &["AGENTS.md"],
        check: docs::agents_md,
    },
    Criterion {
        id: "contributing",
        title: "CONTRIBUTING documentation exists",
        pillar: Pillar::Documentation,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Contribution guidance standardizes change flow and reduces back-and-forth.",
        remediation: "Add CONTRIBUTING.md with local dev steps, testing, PR expectations, and review notes.",
        requires: &[],
        scaffold: &["CONTRIBUTING.md"],
        check: docs::contributing,
    },
    Criterion {
        id: "pre_commit_hooks",
        title: "Pre-commit hooks exist (or equivalent local automation)",
        pillar: Pillar::StyleValidation,
        level: 2,
        scope: CriterionScope::App,
        weight: 4,
        why: "Pre-commit hooks prevent agents from creating avoidable CI churn.",
        remediation: "Add pre-commit (Python) or Husky/lint-staged (Node) or equivalent git hook tooling.",
        requires: &[],
        scaffold: &[".pre-commit-config.yaml"],
        check: style::pre_commit_hooks,
    },
    Criterion {
        id: "large_file_detection",
        title: "Large-file detection exists",
        pillar: Pillar::StyleValidation,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Prevents accidental commits of huge binaries that break agent loops and CI performance.",
        remediation: "Add pre-commit large-file hooks and/or Git LFS policies via .gitattributes.",
        requires: &[],
        scaffold: &[".pre-commit-config.yaml"],
        check: style::large_file_detection,
    },
    Criterion {
        id: "ci_configured",
        title: "CI is configured",
        pillar: Pillar::BuildSystem,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 5,
        why: "Agents need a consistent verification pipeline that mirrors production expectations.",
        remediation: "Add CI workflows to run lint/typecheck/tests on PRs.",
        requires: &[],
        scaffold: &[],
        check: build::ci_configured,
    },
    Criterion {
        id: "ci_lint_job",
        title: "CI runs linting/validation",
        pillar: Pillar::StyleValidation,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Enforcing validation in CI prevents drift and makes agent output predictable.",
        remediation: "Add a lint job to CI (e.g., `ruff check`, `eslint`, `golangci-lint`).",
        requires: &["ci_configured"],
        scaffold: &[],
        check: style::ci_lint_job,
    },
    Criterion {
        id: "ci_test_job",
        title: "CI runs tests",
        pillar: Pillar::Testing,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 4,
        why: "Agents rely on CI as a backstop and as evidence of correctness.",
        remediation: "Add a test job that runs the standard local test command across supported environments.",
        requires: &["ci_configured"],
        scaffold: &[],
        check: testing::ci_test_job,
    },
    Criterion {
        id: "codeowners",
        title: "CODEOWNERS exists",
        pillar: Pillar::SecurityGovernance,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 4,
        why: "Clear ownership ensures critical paths get appropriate review when agents move fast.",
        remediation: "Add CODEOWNERS in .github/ or repo root with ownership for key directories.",
        requires: &[],
        scaffold: &[".github/CODEOWNERS"],
        check: security::codeowners,
    },
    Criterion {
        id: "pr_template",
        title: "PR template exists",
        pillar: Pillar::SecurityGovernance,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "A PR template helps agents include context, risk, and verification evidence consistently.",
        remediation: "Add .github/pull_request_template.md with checklist: tests, docs, risk, rollout/rollback notes.",
        requires: &[],
        scaffold: &[".github/pull_request_template.md"],
        check: security::pr_template,
    },
    Criterion {
        id: "issue_templates",
        title: "Issue templates exist",
        pillar: Pillar::SecurityGovernance,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Structured issues reduce ambiguity and help agents pick up well-scoped work.",
        remediation: "Add .github/ISSUE_TEMPLATE/ with templates for bug, feature, and incident followups.",
        requires: &[],
        scaffold: &[".github/ISSUE_TEMPLATE/bug_report.md", ".github/ISSUE_TEMPLATE/feature_request.md", ".github/ISSUE_TEMPLATE/incident_followup.md", ".github/ISSUE_TEMPLATE/config.yml"],
        check: security::issue_templates,
    },
    Criterion {
        id: "devcontainer",
        title: "Devcontainer exists",
        pillar: Pillar::DevEnvironment,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Reproducible dev environments reduce setup variance for humans and agents.",
        remediation: "Add .devcontainer/devcontainer.json (or equivalent) with dependencies and recommended extensions.",
        requires: &[],
        scaffold: &[".devcontainer/devcontainer.json"],
        check: devenv::devcontainer,
    },
    Criterion {
        id: "env_template",
        title: "Environment template exists (.env.example)",
        pillar: Pillar::DevEnvironment,
        level: 2,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Agents cannot guess environment variables safely. Templates prevent trial-and-error loops.",
        remediation: "Add .env.example documenting required variables and safe defaults (no secrets).",
        requires: &[],
        scaffold: &[".env.example"],
        check: devenv::env_template,
    },
    // Level 3: Standardized
    Criterion {
        id: "integration_tests",
        title: "Integration/E2E tests exist where applicable",
        pillar: Pillar::Testing,
        level: 3,
        scope: CriterionScope::App,
        weight: 4,
        why: "Integration tests validate system behavior and reduce regressions from refactors.",
        remediation: "Add a minimal integration/e2e suite (or document why it's not applicable).",
        requires: &[],
        scaffold: &[],
        check: testing::integration_tests,
    },
    Criterion {
        id: "coverage_tracking",
        title: "Coverage tracking exists",
        pillar: Pillar::Testing,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Coverage signals help agents understand risk and where to add tests.",
        remediation: "Add Codecov/Coveralls or local coverage reporting (pytest-cov, nyc, go test -cover).",
        requires: &[],
        scaffold: &[],
        check: testing::coverage_tracking,
    },
    Criterion {
        id: "coverage_threshold",
        title: "Coverage threshold is enforced",
        pillar: Pillar::Testing,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "A threshold prevents silent test erosion as agents make frequent edits.",
        remediation: "Configure CI to fail if coverage drops below a defined threshold.",
        requires: &["coverage_tracking"],
        scaffold: &[],
        check: testing::coverage_threshold,
    },
    Criterion {
        id: "env_vars_documented",
        title: "Environment variables are documented",
        pillar: Pillar::Documentation,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Agents need explicit runtime configuration knowledge to validate behavior locally.",
        remediation: "Document required env vars in AGENTS/README and keep .env.example updated.",
        requires: &[],
        scaffold: &[],
        check: docs::env_vars_documented,
    },
    Criterion {
        id: "docs_freshness",
        title: "Docs appear maintained (freshness signal)",
        pillar: Pillar::Documentation,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Stale instructions cause agents to fail repeatedly with outdated commands.",
        remediation: "Update README/AGENTS/CONTRIBUTING when commands or architecture changes.",
        requires: &[],
        scaffold: &[],
        check: docs::docs_freshness,
    },
    Criterion {
        id: "doc_gen_automation",
        title: "Automated documentation generation/build exists",
        pillar: Pillar::Documentation,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Doc automation reduces drift and makes updates cheaper for agents.",
        remediation: "Add a docs build workflow (mkdocs/sphinx/docusaurus) or a generator step.",
        requires: &["ci_configured"],
        scaffold: &[],
        check: docs::doc_gen_automation,
    },
    Criterion {
        id: "service_flow_docs",
        title: "Service flow / architecture is documented (diagrams or structured docs)",
        pillar: Pillar::Documentation,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Agents are more effective when system boundaries and flows are explicit.",
        remediation: "Add architecture docs (mermaid/plantuml) and keep a short system map.",
        requires: &[],
        scaffold: &[],
        check: docs::service_flow_docs,
    },
    Criterion {
        id: "local_services_setup",
        title: "Local services setup exists (e.g., docker compose) if needed",
        pillar: Pillar::DevEnvironment,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Agents need a reproducible way to run dependencies (db, cache, queues) locally.",
        remediation: "Add docker compose or scripts to start required local dependencies.",
        requires: &[],
        scaffold: &[],
        check: devenv::local_services_setup,
    },
    Criterion {
        id: "db_migrations",
        title: "Database migrations / schema management exists (if applicable)",
        pillar: Pillar::DevEnvironment,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Schema drift breaks agent verification and creates deployment risk.",
        remediation: "Add migrations tooling (alembic/prisma/flyway/etc) or document schema strategy.",
        requires: &[],
        scaffold: &[],
        check: devenv::db_migrations,
    },
    Criterion {
        id: "structured_logging",
        title: "Structured logging is present",
        pillar: Pillar::Observability,
        level: 3,
        scope: CriterionScope::App,
        weight: 2,
        why: "Structured logs accelerate debugging by making failures searchable and contextual.",
        remediation: "Adopt structured logging (JSON) and document log fields and redaction rules.",
        requires: &[],
        scaffold: &[],
        check: observability::structured_logging,
    },
    Criterion {
        id: "metrics_instrumentation",
        title: "Metrics instrumentation is present",
        pillar: Pillar::Observability,
        level: 3,
        scope: CriterionScope::App,
        weight: 2,
        why: "Metrics turn behavior into measurable signals agents can reason about.",
        remediation: "Add metrics instrumentation (Prometheus/OpenTelemetry/StatsD) and document key metrics.",
        requires: &[],
        scaffold: &[],
        check: observability::metrics_instrumentation,
    },
    Criterion {
        id: "tracing_instrumentation",
        title: "Distributed tracing is present",
        pillar: Pillar::Observability,
        level: 3,
        scope: CriterionScope::App,
        weight: 1,
        why: "Traces connect failures across services; agents can find root causes faster.",
        remediation: "Instrument traces via OpenTelemetry and propagate trace/request IDs.",
        requires: &[],
        scaffold: &[],
        check: observability::tracing_instrumentation,
    },
    Criterion {
        id: "error_tracking",
        title: "Error tracking is present",
        pillar: Pillar::Observability,
        level: 3,
        scope: CriterionScope::App,
        weight: 1,
        why: "Error tracking provides high-signal failures and context beyond logs alone.",
        remediation: "Add error tracking (Sentry/Bugsnag/etc) with contextual metadata.",
        requires: &[],
        scaffold: &[],
        check: observability::error_tracking,
    },
    Criterion {
        id: "runbooks",
        title: "Runbooks/playbooks exist (or are linked)",
        pillar: Pillar::Observability,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Runbooks encode operational response so agents can act safely during incidents.",
        remediation: "Create runbooks for common failure modes and link them from README/AGENTS.",
        requires: &[],
        scaffold: &[],
        check: observability::runbooks,
    },
    Criterion {
        id: "health_checks",
        title: "Health/readiness checks exist (if deployed service)",
        pillar: Pillar::Observability,
        level: 3,
        scope: CriterionScope::App,
        weight: 1,
        why: "Health endpoints enable automated validation and safe rollouts.",
        remediation: "Add /health and /ready endpoints and test them in CI.",
        requires: &[],
        scaffold: &[],
        check: observability::health_checks,
    },
    Criterion {
        id: "dependabot",
        title: "Automated dependency updates are configured",
        pillar: Pillar::SecurityGovernance,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Dependency hygiene reduces risk as agents ship more frequently.",
        remediation: "Enable Dependabot/Renovate for dependencies and CI workflows.",
        requires: &[],
        scaffold: &[".github/dependabot.yml"],
        check: security::dependabot,
    },
    Criterion {
        id: "sast_scanning",
        title: "Static security scanning is configured (SAST)",
        pillar: Pillar::SecurityGovernance,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Automated scanning is a scalable guardrail for accelerated change.",
        remediation: "Add CodeQL/Semgrep scanning in CI and review findings regularly.",
        requires: &["ci_configured"],
        scaffold: &[],
        check: security::sast_scanning,
    },
    Criterion {
        id: "secret_scanning_tooling",
        title: "Secret scanning tooling exists (repo-local detectable)",
        pillar: Pillar::SecurityGovernance,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Agents should not introduce secrets; scanning catches leaks quickly.",
        remediation: "Add gitleaks or equivalent scanning in CI and a baseline allowlist as needed.",
        requires: &[],
        scaffold: &[".gitleaks.toml"],
        check: security::secret_scanning_tooling,
    },
    Criterion {
        id: "security_policy",
        title: "Security policy exists (SECURITY.md)",
        pillar: Pillar::SecurityGovernance,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Clarifies reporting and response expectations for security issues.",
        remediation: "Add SECURITY.md describing reporting channels and response SLAs.",
        requires: &[],
        scaffold: &["SECURITY.md"],
        check: security::security_policy,
    },
    Criterion {
        id: "log_scrubbing",
        title: "Log redaction / scrubbing mechanisms exist (best-effort detection)",
        pillar: Pillar::SecurityGovernance,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "As output volume increases, preventing PII/secret leakage into logs becomes critical.",
        remediation: "Implement redaction utilities, document sensitive fields, and enforce via lint/tests.",
        requires: &[],
        scaffold: &[],
        check: security::log_scrubbing,
    },
    Criterion {
        id: "branch_protection",
        title: "Branch protection / required reviews are enabled (requires repo-host metadata)",
        pillar: Pillar::SecurityGovernance,
        level: 3,
        scope: CriterionScope::Repo,
        weight: 3,
        why: "Agents move fast; review gates and protected branches prevent unsafe changes from landing unreviewed.",
        remediation: "Enable protected branches and required reviews in repository settings.",
        requires: &[],
        scaffold: &[],
        check: security::branch_protection,
    },
    // Level 4: Optimized
    Criterion {
        id: "ci_cache",
        title: "CI uses caching (fast feedback proxy)",
        pillar: Pillar::BuildSystem,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Faster CI loops increase agent throughput and reduce time-to-fix.",
        remediation: "Add dependency caching (e.g., actions/cache) and parallelize test jobs where possible.",
        requires: &["ci_configured"],
        scaffold: &[],
        check: build::ci_cache,
    },
    Criterion {
        id: "flaky_tests",
        title: "Flaky test detection exists",
        pillar: Pillar::Testing,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 2,
        why: "Flaky tests waste agent cycles and create mistrust in feedback signals.",
        remediation: "Add retries/quarantine mechanisms and track flaky tests explicitly.",
        requires: &["ci_test_job"],
        scaffold: &[],
        check: testing::flaky_tests,
    },
    Criterion {
        id: "test_timing",
        title: "Test performance tracking exists (timings/benchmarks)",
        pillar: Pillar::Testing,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Optimizing test runtime improves agent iteration speed and CI cost.",
        remediation: "Emit timings (pytest --durations, go test timing) and monitor regressions.",
        requires: &["ci_test_job"],
        scaffold: &[],
        check: testing::test_timing,
    },
    Criterion {
        id: "unused_deps",
        title: "Unused dependency detection exists",
        pillar: Pillar::CodeQuality,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Unused deps increase attack surface and slow down builds and agents.",
        remediation: "Add depcheck/knip/deptry/go mod tidy checks in CI.",
        requires: &[],
        scaffold: &[],
        check: quality::unused_deps,
    },
    Criterion {
        id: "complexity",
        title: "Complexity analysis exists",
        pillar: Pillar::CodeQuality,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Complex functions are harder for agents to modify safely.",
        remediation: "Add complexity rules/tools (eslint complexity, radon/lizard/gocyclo) and refactor hot spots.",
        requires: &[],
        scaffold: &[],
        check: quality::complexity,
    },
    Criterion {
        id: "dead_code",
        title: "Dead code detection exists",
        pillar: Pillar::CodeQuality,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Dead code confuses agents and increases hallucinated changes to unused paths.",
        remediation: "Add vulture/ts-prune/knip or equivalent and remove unused code.",
        requires: &[],
        scaffold: &[],
        check: quality::dead_code,
    },
    Criterion {
        id: "dup_code",
        title: "Duplicate code detection exists",
        pillar: Pillar::CodeQuality,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Duplicate logic multiplies maintenance cost and increases inconsistency risk.",
        remediation: "Add jscpd/CPD/Sonar-style duplication checks and refactor shared utilities.",
        requires: &[],
        scaffold: &[],
        check: quality::dup_code,
    },
    Criterion {
        id: "module_boundaries",
        title: "Module boundary enforcement exists (architectural constraints)",
        pillar: Pillar::CodeQuality,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Explicit boundaries prevent agents from making changes that violate architecture.",
        remediation: "Add boundary enforcement (import-linter, eslint boundaries, depguard) and document modules.",
        requires: &[],
        scaffold: &[],
        check: quality::module_boundaries,
    },
    Criterion {
        id: "todo_tracking",
        title: "Tech debt tracking exists (TODO policy/scanner)",
        pillar: Pillar::CodeQuality,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Without guardrails, agents can accumulate TODO debt quickly.",
        remediation: "Enforce TODO format (with ticket) and add CI scanners for TODO/FIXME.",
        requires: &[],
        scaffold: &[],
        check: quality::todo_tracking,
    },
    Criterion {
        id: "alerting",
        title: "Alerting signals/config exist",
        pillar: Pillar::Observability,
        level: 4,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Alerting closes the loop: agents can detect regressions and verify safe operation.",
        remediation: "Add alert rules and document alert routing and on-call expectations.",
        requires: &[],
        scaffold: &[],
        check: observability::alerting,
    },
    // Level 5: Autonomous
    Criterion {
        id: "agent_workflows_present",
        title: "Agent workflows exist (repeatable automation in-repo)",
        pillar: Pillar::BuildSystem,
        level: 5,
        scope: CriterionScope::Repo,
        weight: 1,
        why: "Level 5 requires repeatable automation and self-serve maintenance routines.",
        remediation: "Add standardized automation workflows for recurring maintenance tasks.",
        requires: &[],
        scaffold: &[],
        check: build::agent_workflows_present,
    },
];
