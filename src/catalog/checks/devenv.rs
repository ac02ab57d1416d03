//! Development environment checks.

use super::docs::ENV_TEMPLATES;
use super::manifests_mention;
use crate::catalog::Signals;
use crate::evaluate::Outcome;
use crate::evidence::Probe;

const COMPOSE_FILES: &[&str] = &[
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

const MIGRATION_PATHS: &[&str] = &[
    "migrations",
    "db/migrations",
    "prisma/migrations",
    "alembic",
    "alembic.ini",
    "flyway",
    "liquibase",
    "knexfile.js",
];

/// Dependencies that imply a database the project must manage.
pub const DATABASE_DEPS: &[&str] = &[
    "postgres",
    "psycopg",
    "mysql",
    "mariadb",
    "mongodb",
    "mongoose",
    "sqlite",
    "sqlalchemy",
    "prisma",
    "typeorm",
    "sequelize",
    "knex",
    "gorm",
    "diesel",
    "sqlx",
    "hibernate",
];

/// Dependencies on other backing services (caches, queues, search).
const SERVICE_DEPS: &[&str] = &[
    "redis",
    "kafka",
    "rabbitmq",
    "amqp",
    "elasticsearch",
    "nats",
    "memcached",
];

pub fn devcontainer(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(
        p.evidence,
        &[".devcontainer/devcontainer.json", ".devcontainer.json"],
    );
    s.finish(
        "Devcontainer configuration found.",
        "No devcontainer configuration found.",
    )
}

pub fn env_template(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, ENV_TEMPLATES);
    s.finish(
        "Environment template found.",
        "No .env.example (or equivalent) found.",
    )
}

pub fn local_services_setup(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, COMPOSE_FILES);
    s.paths(p.evidence, &["docker"]);
    if s.found() {
        return s.finish("Local services setup detected (compose/docker).", "");
    }

    let mut needs = Signals::new();
    let needs_services = manifests_mention(p, &mut needs, DATABASE_DEPS)
        | manifests_mention(p, &mut needs, SERVICE_DEPS);
    if !needs_services {
        return Outcome::not_applicable(
            "No backing-service dependencies declared; local services are not needed.",
        );
    }
    Outcome::Fail {
        reason: "Backing-service dependencies are declared, but there is no compose file or docker/ setup."
            .to_string(),
        evidence: needs.into_hits(),
    }
}

pub fn db_migrations(p: &Probe<'_>) -> Outcome {
    let mut s = Signals::new();
    s.paths(p.evidence, MIGRATION_PATHS);
    for app in p.apps.iter().filter(|a| a.path != ".") {
        let scoped: Vec<String> = MIGRATION_PATHS.iter().map(|m| app.join(m)).collect();
        s.paths(p.evidence, &scoped);
    }
    if s.found() {
        return s.finish("Database migration/schema tooling detected.", "");
    }

    let mut uses_db = Signals::new();
    if !manifests_mention(p, &mut uses_db, DATABASE_DEPS) {
        return Outcome::not_applicable(
            "No database dependencies declared; migrations are not applicable.",
        );
    }
    Outcome::Fail {
        reason: "Database dependencies are declared, but no migration tooling was found.".to_string(),
        evidence: uses_db.into_hits(),
    }
}
