//! Output formatting for scorecards and remediation plans.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: the full structure, stable field names, for downstream tooling

use colored::*;
use serde::Serialize;

use crate::aggregate::{PassRate, Tally};
use crate::catalog::{Catalog, CriterionScope};
use crate::evaluate::{CriterionResult, Status};
use crate::recommend::{ActionItem, Disposition};
use crate::remediation::RemediationPlan;
use crate::scorecard::Scorecard;

/// Output format accepted by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

// =============================================================================
// JSON Format
// =============================================================================

/// Serialize any report value as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Write a report value to stdout as JSON.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    id: &'a str,
    title: &'a str,
    pillar: crate::catalog::Pillar,
    level: u8,
    scope: CriterionScope,
    weight: u32,
    requires: &'a [&'static str],
    auto_scaffold: bool,
}

/// Write the criterion catalog as JSON.
pub fn write_catalog_json(catalog: &Catalog) -> anyhow::Result<()> {
    let entries: Vec<CatalogEntry<'_>> = catalog
        .criteria()
        .iter()
        .map(|c| CatalogEntry {
            id: c.id,
            title: c.title,
            pillar: c.pillar,
            level: c.level,
            scope: c.scope,
            weight: c.weight,
            requires: c.requires,
            auto_scaffold: !c.scaffold.is_empty(),
        })
        .collect();
    write_json(&entries)
}

// =============================================================================
// Pretty Format
// =============================================================================

fn write_header(title: &str) {
    println!();
    print!("  ");
    print!("{}", "readycheck".cyan().bold());
    println!(" v{}  {}", env!("CARGO_PKG_VERSION"), title.dimmed());
    println!();
}

fn colored_rate(rate: &PassRate) -> ColoredString {
    let text = format!("{:>4}", rate.to_string());
    match rate.percent() {
        None => text.dimmed(),
        Some(p) if p >= 80 => text.green(),
        Some(p) if p >= 50 => text.yellow(),
        Some(_) => text.red(),
    }
}

fn counts(t: &Tally) -> String {
    let mut out = format!("{} pass, {} fail", t.passed, t.failed);
    if t.skipped > 0 {
        out.push_str(&format!(", {} skipped", t.skipped));
    }
    out
}

fn status_tag(status: Status) -> ColoredString {
    match status {
        Status::Pass => "PASS".green(),
        Status::Fail => "FAIL".red(),
        Status::Skipped => "SKIP".dimmed(),
    }
}

fn disposition_tag(d: Disposition) -> ColoredString {
    match d {
        Disposition::AutoScaffold => "auto  ".blue(),
        Disposition::Manual => "manual".yellow(),
    }
}

/// Write a scorecard in pretty (human-readable) format.
pub fn write_pretty(card: &Scorecard, details: bool) {
    write_header("repository readiness");

    print!("  {}", "Repository: ".dimmed());
    if card.org_name.is_empty() {
        println!("{}", card.repo_name);
    } else {
        println!("{} ({})", card.repo_name, card.org_name);
    }
    if !card.repo_description.is_empty() {
        println!("  {}{}", "            ".dimmed(), card.repo_description.dimmed());
    }
    print!("  {}", "Apps:       ".dimmed());
    let apps: Vec<String> = card
        .apps
        .iter()
        .map(|a| format!("{} [{}]", a.path, a.kind))
        .collect();
    println!("{}", apps.join(", "));
    if !card.languages.is_empty() {
        print!("  {}", "Languages:  ".dimmed());
        println!("{}", card.languages.join(", "));
    }
    println!();

    write_progression(card);
    println!();

    write_levels(card);
    println!();
    write_pillars(card);
    println!();

    if !card.action_items.is_empty() {
        write_action_items(&card.action_items);
        println!();
    }

    write_highlights(card);
    println!();

    if details {
        write_criteria_results(&card.criteria);
        println!();
    }
}

fn write_progression(card: &Scorecard) {
    let p = &card.progression;
    let achieved = if p.level_achieved == 0 {
        "none".to_string()
    } else {
        format!("{} ({})", p.level_achieved, crate::catalog::level_name(p.level_achieved))
    };
    print!("  {} ", "Level achieved:".bold());
    if p.blocking_level.is_none() {
        println!("{}", achieved.green().bold());
    } else {
        println!("{}", achieved.yellow().bold());
    }
    if let Some(blocking) = p.blocking_level {
        println!(
            "  {} {} ({})",
            "Blocking level:".dimmed(),
            blocking,
            crate::catalog::level_name(blocking)
        );
    }
    if let Some(target) = p.next_level_target {
        println!("  {} {}", "Next target:   ".dimmed(), target);
    }
    println!(
        "  {} {}  {}",
        "Overall:       ".dimmed(),
        colored_rate(&card.overall_rate),
        counts(&card.overall).dimmed()
    );
}

fn write_levels(card: &Scorecard) {
    println!("  {}", "Levels:".bold());
    for l in &card.levels {
        let mark = if l.meets_threshold {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "    {} L{} {:<14} {}  {}",
            mark,
            l.level,
            l.name,
            colored_rate(&l.rate),
            counts(&l.tally).dimmed()
        );
    }
}

fn write_pillars(card: &Scorecard) {
    println!("  {}", "Pillars:".bold());
    for p in &card.pillars {
        println!(
            "    {:<24} {}  {}",
            p.name,
            colored_rate(&p.rate),
            counts(&p.tally).dimmed()
        );
    }
}

fn write_action_items(items: &[ActionItem]) {
    println!("  {} ({}):", "Action items".bold(), items.len());
    println!();
    for item in items {
        print!("    {}. ", item.rank);
        print!("{} ", disposition_tag(item.disposition));
        print!("{}", item.title);
        println!(" {}", format!("[{}]", item.criterion_id).dimmed());
        if item.scope == CriterionScope::App {
            let failing = format!("failing in: {}", item.failing_scopes.join(", "));
            println!("          {}", failing.dimmed());
        }
        println!("          {}", item.problem);
        println!("          {} {}", "→".cyan(), item.remediation);
        if !item.unmet_prerequisites.is_empty() {
            println!(
                "          {}",
                format!("requires: {}", item.unmet_prerequisites.join(", ")).dimmed()
            );
        }
    }
}

fn write_highlights(card: &Scorecard) {
    let h = &card.highlights;
    if !h.strengths.is_empty() {
        println!("  {}", "Strengths:".bold());
        for s in &h.strengths {
            println!("    {} {} ({}%)", "+".green(), s.name, s.percent);
        }
    }
    if !h.opportunities.is_empty() {
        println!("  {}", "Opportunities:".bold());
        for o in &h.opportunities {
            println!(
                "    {} {} {}",
                "-".yellow(),
                o.title,
                format!("(L{}, weight {})", o.level, o.weight).dimmed()
            );
        }
    }
}

fn write_criteria_results(results: &[CriterionResult]) {
    println!("  {} ({}):", "Criteria".bold(), results.len());
    println!();
    for r in results {
        print!("    {} ", status_tag(r.status));
        print!("L{} ", r.level);
        print!("{:<28}", r.id);
        if r.scope == CriterionScope::App {
            print!("{}", format!(" {}/{}", r.numerator, r.denominator).dimmed());
        }
        println!();
        if !r.reason.is_empty() {
            println!("            {}", r.reason.dimmed());
        }
    }
}

/// Write a remediation plan in pretty format.
pub fn write_plan_pretty(plan: &RemediationPlan) {
    write_header("remediation plan");

    print!("  {}", "Repository: ".dimmed());
    println!("{}", plan.repo_name);
    let Some(blocking) = plan.blocking_level else {
        println!();
        println!("  {}", "Every level meets the threshold; nothing to remediate.".green());
        println!();
        return;
    };
    println!(
        "  {} {}  {} {}",
        "Achieved:".dimmed(),
        plan.level_achieved,
        "Blocking:".dimmed(),
        blocking
    );
    println!(
        "  {} auto-scaffold, {} manual",
        plan.auto_scaffold_count(),
        plan.manual_count()
    );
    println!();

    for (idx, item) in plan.items.iter().enumerate() {
        print!("  {}. ", idx + 1);
        print!("{} ", disposition_tag(item.disposition));
        print!("{}", item.title.bold());
        println!(" {}", format!("[{}]", item.criterion_id).dimmed());
        println!("       {}", item.description);
        for op in &item.file_ops {
            let state = if op.already_exists {
                "exists".dimmed()
            } else {
                "create".green()
            };
            println!("       {} {}  {}", state, op.path.blue(), op.reason.dimmed());
        }
        for step in &item.manual_steps {
            println!("       {} {}", "•".yellow(), step);
        }
        println!();
    }
    println!("  {}", "No files were written.".dimmed());
    println!();
}

/// List the criterion catalog.
pub fn write_catalog_pretty(catalog: &Catalog) {
    write_header("criteria");
    for level in 1..=crate::catalog::MAX_LEVEL {
        println!(
            "  {}",
            format!("Level {}: {}", level, crate::catalog::level_name(level)).bold()
        );
        for c in catalog.criteria().iter().filter(|c| c.level == level) {
            let scope = match c.scope {
                CriterionScope::Repo => "repo",
                CriterionScope::App => "app ",
            };
            println!(
                "    {:<26} {} {:<22} {}",
                c.id,
                scope.dimmed(),
                c.pillar.name(),
                c.title.dimmed()
            );
        }
        println!();
    }
}
