//! Observability checks.
//!
//! Instrumentation criteria look for well-known libraries in the
//! application's dependency manifests. Health checks additionally scan a
//! bounded number of entry-point sources.

use super::{in_scope, manifests_mention, ROOT_DOCS};
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::Probe;

/// Sources scanned for health endpoints before giving up.
const MAX_HEALTH_SCAN: usize = 30;

const SOURCE_EXTENSIONS: &[&str] = &[".py", ".ts", ".js", ".go", ".rs", ".java"];

const LOGGING_LIBS: &[&str] = &[
    "go.uber.org/zap",
    "uber-go/zap",
    "sirupsen/logrus",
    "rs/zerolog",
    "log/slog",
    "structlog",
    "loguru",
    "python-json-logger",
    "pino",
    "winston",
    "bunyan",
    "tracing-subscriber",
    "slog",
    "logback",
    "log4j",
    "slf4j",
    "serilog",
];

const METRICS_LIBS: &[&str] = &[
    "prometheus",
    "prom-client",
    "opentelemetry",
    "datadog",
    "statsd",
    "micrometer",
    "metrics-exporter",
];

const TRACING_LIBS: &[&str] = &["opentelemetry", "jaeger", "zipkin", "dd-trace"];

const ERROR_TRACKERS: &[&str] = &["sentry", "bugsnag", "rollbar", "honeybadger"];

const HEALTH_PATTERNS: &[&str] = &[
    "healthz",
    "readiness",
    "/health",
    "/ready",
    "health_check",
    "liveness",
];

/// Web frameworks whose presence marks an application as a service.
const WEB_FRAMEWORKS: &[&str] = &[
    "express",
    "fastify",
    "koa",
    "@nestjs",
    "@hapi",
    "flask",
    "fastapi",
    "django",
    "starlette",
    "aiohttp",
    "gin-gonic",
    "labstack/echo",
    "gofiber",
    "go-chi",
    "gorilla/mux",
    "actix-web",
    "axum",
    "rocket",
    "warp",
    "hyper",
    "tide",
    "poem",
    "spring-boot",
    "microsoft.aspnetcore",
];

const RUNBOOK_DIRS: &[&str] = &[
    "runbooks",
    "runbook",
    "ops/runbooks",
    "docs/runbooks",
    "playbooks",
    "docs/playbooks",
];

fn library_check(p: &Probe<'_>, libs: &[&str], pass: &str, fail: &str) -> Outcome {
    let mut s = Signals::new();
    manifests_mention(p, &mut s, libs);
    s.finish(pass, fail)
}

pub fn structured_logging(p: &Probe<'_>) -> Outcome {
    library_check(
        p,
        LOGGING_LIBS,
        "Structured logging library detected.",
        "No structured logging library detected.",
    )
}

pub fn metrics_instrumentation(p: &Probe<'_>) -> Outcome {
    library_check(
        p,
        METRICS_LIBS,
        "Metrics/telemetry library detected.",
        "No metrics/telemetry library detected.",
    )
}

pub fn tracing_instrumentation(p: &Probe<'_>) -> Outcome {
    library_check(
        p,
        TRACING_LIBS,
        "Tracing library detected.",
        "No tracing library detected.",
    )
}

pub fn error_tracking(p: &Probe<'_>) -> Outcome {
    library_check(
        p,
        ERROR_TRACKERS,
        "Error tracking library detected.",
        "No error tracking library detected.",
    )
}

pub fn runbooks(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, RUNBOOK_DIRS);
    s.text_any(p.evidence, ROOT_DOCS, &["runbook", "playbook"]);
    s.finish(
        "Runbooks/playbooks found or linked.",
        "No runbooks or playbooks found.",
    )
}

/// Entry-point sources worth scanning for health endpoints.
fn health_candidates(p: &Probe<'_>) -> Vec<String> {
    let mut files = Vec::new();
    let main_go = p.path("main.go");
    if p.evidence.is_file(&main_go) {
        files.push(main_go);
    }
    for dir in in_scope(p, &["cmd", "src", "app", "server", "api"]) {
        if !p.evidence.is_dir(&dir) {
            continue;
        }
        files.extend(
            p.evidence
                .index()
                .files_under(&dir)
                .filter(|f| SOURCE_EXTENSIONS.iter().any(|ext| f.ends_with(ext)))
                .map(str::to_string),
        );
    }
    files.truncate(MAX_HEALTH_SCAN);
    files
}

pub fn health_checks(p: &Probe<'_>) -> Outcome {
    if p.is_library() || p.config.declares_non_service() {
        return Outcome::not_applicable("Not a deployed service; health checks are not applicable.");
    }
    let mut s = Signals::new();
    s.text_any(p.evidence, &health_candidates(p), HEALTH_PATTERNS);
    if s.found() {
        return s.finish("Health/readiness endpoints detected.", "");
    }

    let mut framework = Signals::new();
    if !manifests_mention(p, &mut framework, WEB_FRAMEWORKS) {
        return Outcome::not_applicable(
            "No web framework dependency found; application does not look like a service.",
        );
    }
    Outcome::Fail {
        reason: "Application depends on a web framework but exposes no health/readiness endpoint."
            .to_string(),
        evidence: framework.into_hits(),
    }
}

pub fn alerting(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    for hit in p.evidence.glob(&[
        "**/alertmanager*.yml",
        "**/alertmanager*.yaml",
        "**/*alert*.yml",
        "**/*alert*.yaml",
        "**/prometheus/**",
    ]) {
        s.hit(hit);
    }
    s.text_any(
        p.evidence,
        ROOT_DOCS,
        &["pagerduty", "opsgenie", "alertmanager", "prometheus alert", "alerts.yml", "alerts.yaml"],
    );
    s.finish(
        "Alerting configuration signals found.",
        "No alerting configuration signals found.",
    )
}
