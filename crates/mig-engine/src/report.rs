//! Plain-text reports for the CLI

use mig_planner::{MigrationPlan, MigrationProgress};
use mig_resolver::AnalysisResult;
use mig_inventory::Notes;
use std::fmt::Write;

/// Render an analysis result
#[must_use]
pub fn render_analysis(result: &AnalysisResult, separator: char) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Required components: {}", result.closure.len());

    let _ = writeln!(out, "\nCustom components to migrate ({}):", result.custom_to_migrate.len());
    for component in &result.custom_to_migrate {
        let _ = writeln!(out, "  {:<16} {} ({})", component.kind, component.name, component.id);
    }

    let _ = writeln!(out, "\nFields on standard objects ({}):", result.standard_groups.len());
    for group in &result.standard_groups {
        let _ = writeln!(out, "  {}: {}", group.parent, group.field_names(separator).join(", "));
    }

    if !result.excluded.is_empty() {
        let _ = writeln!(out, "\nAlready on the target org ({}):", result.excluded.len());
        for excluded in &result.excluded {
            let _ = writeln!(out, "  {} [{}]", excluded.component.name, excluded.reason);
        }
    }

    render_notes(&mut out, &result.notes);
    out
}

/// Render a migration plan
#[must_use]
pub fn render_plan(plan: &MigrationPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Migration order ({} components):", plan.order.len());
    for (i, component) in plan.order.iter().enumerate() {
        let _ = writeln!(out, "  {:>4}. {:<16} {} ({})", i + 1, component.kind, component.name, component.id);
    }

    let _ = writeln!(out, "\nWaves ({}):", plan.batches.len());
    for (i, wave) in plan.batches.iter().enumerate() {
        let _ = writeln!(out, "  {}: {}", i + 1, wave.join(", "));
    }

    if plan.cycles.is_empty() {
        let _ = writeln!(out, "\nNo dependency cycles");
    } else {
        let _ = writeln!(out, "\nDependency cycles ({}):", plan.cycles.len());
        for cycle in &plan.cycles {
            let _ = writeln!(out, "  {}", cycle.join(" -> "));
        }
    }

    render_notes(&mut out, &plan.notes);
    out
}

/// Render a progress summary
#[must_use]
pub fn render_progress(progress: &MigrationProgress) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Progress: {:.1}% ({} done, {} skipped of {})",
        progress.percent_complete(),
        progress.done,
        progress.skipped,
        progress.total
    );
    let _ = writeln!(
        out,
        "  not started: {}, in progress: {}, blocked: {}",
        progress.not_started, progress.in_progress, progress.failed
    );
    let _ = writeln!(out, "\nReady to migrate ({}):", progress.ready.len());
    for id in &progress.ready {
        let _ = writeln!(out, "  {id}");
    }
    let _ = writeln!(out, "\nWaiting on dependencies ({}):", progress.blocked.len());
    for id in &progress.blocked {
        let _ = writeln!(out, "  {id}");
    }
    out
}

fn render_notes(out: &mut String, notes: &Notes) {
    if notes.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nNotes:");
    for (id, messages) in notes.iter() {
        for message in messages {
            let _ = writeln!(out, "  {id}: {message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mig_inventory::{Component, ComponentKind};

    #[test]
    fn analysis_report_lists_groups() {
        let inventory = vec![
            Component::new("acc", "Account", ComponentKind::DataObject),
            Component::new("loy", "Account.Loyalty__c", ComponentKind::DataField),
        ];
        let result = mig_resolver::analyze(&["loy"], &inventory);
        let text = render_analysis(&result, '.');

        assert!(text.contains("Required components: 2"));
        assert!(text.contains("  Account: Loyalty__c"));
        assert!(text.contains("Account [platform-standard]"));
    }

    #[test]
    fn plan_report_shows_cycles() {
        let mut a = Component::new("a", "A", ComponentKind::CodeModule);
        let b = Component::new("b", "B", ComponentKind::CodeModule).with_requires(a.to_ref());
        a = a.with_requires(b.to_ref());
        let plan = mig_planner::plan_order(&[a, b]);
        let text = render_plan(&plan);

        assert!(text.contains("Dependency cycles (1):"));
        assert!(text.contains("a -> b"));
    }
}
