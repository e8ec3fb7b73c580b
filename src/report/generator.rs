use crate::domain::{format_number, points_delta, task_check, Achievement, ChallengeCard, GlobalStats};
use crate::report::stats::{calculate_progress_stats, dot_summary};
use crate::store::UserState;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Compiled-in data the report reads alongside the store
pub struct ReportContext<'a> {
    pub catalog: &'a [ChallengeCard],
    pub achievements: &'a [Achievement],
    pub global: GlobalStats,
}

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a markdown progress report for the given date
pub fn render_report(state: &UserState, context: &ReportContext<'_>, date: NaiveDate) -> String {
    let stats = calculate_progress_stats(state);
    let dots = dot_summary(state, context.catalog);

    let mut report = String::new();

    // Header
    report.push_str(&format!("# Eco Report - {}\n\n", date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Level:** {}\n", state.level()));
    report.push_str(&format!("- **Points:** {}\n", state.points()));
    report.push_str(&format!("- **Streak:** {} days\n", state.streak()));
    report.push_str(&format!(
        "- **Tasks Done:** {}/{} ({})\n",
        stats.completed_count,
        stats.total_tasks,
        format_percent(stats.completion_percent)
    ));
    report.push_str(&format!(
        "- **Points Earned Today:** {} ({} still open)\n\n",
        stats.earned_points, stats.open_points
    ));

    // Tasks Section
    report.push_str("## Today's Tasks\n\n");
    for task in state.tasks() {
        report.push_str(&format!(
            "- {} {} ({} pts)\n",
            task_check(task.completed, false),
            task.title,
            task.points
        ));
    }
    report.push('\n');

    // Challenge progress
    if !dots.is_empty() {
        report.push_str("## Challenge Progress\n\n");
        for summary in &dots {
            match summary.days {
                Some(days) => report.push_str(&format!(
                    "- **{}:** {}/{} days marked\n",
                    summary.title, summary.marked, days
                )),
                None => report.push_str(&format!(
                    "- **{}:** {} days marked\n",
                    summary.title, summary.marked
                )),
            }
        }
        report.push('\n');
    }

    // Activity Section
    report.push_str("## Recent Activity\n\n");
    for entry in state.recent_activities() {
        report.push_str(&format!(
            "- {} ({}) {}\n",
            entry.action,
            entry.date,
            points_delta(entry.points)
        ));
    }
    report.push_str(&format!("\nNet: {}\n\n", points_delta(stats.log_net_points)));

    // Achievements
    let unlocked = context.achievements.iter().filter(|a| a.unlocked).count();
    report.push_str(&format!(
        "## Achievements ({}/{})\n\n",
        unlocked,
        context.achievements.len()
    ));
    for achievement in context.achievements {
        let mark = if achievement.unlocked { "x" } else { " " };
        report.push_str(&format!(
            "- [{}] {} {}: {}\n",
            mark, achievement.icon, achievement.title, achievement.description
        ));
    }
    report.push('\n');

    // Community
    report.push_str("## Community Impact\n\n");
    report.push_str(&format!("- **Members:** {}\n", format_number(context.global.total_users)));
    report.push_str(&format!("- **CO2 Saved:** {} kg\n", format_number(context.global.co2_saved_kg)));
    report.push_str(&format!("- **Trees Planted:** {}\n", format_number(context.global.trees_planted)));
    report.push_str(&format!(
        "- **Waste Reduced:** {} kg\n",
        format_number(context.global.waste_reduced_kg)
    ));

    report
}

/// Write a report atomically (temp file in the same directory, then rename)
pub fn write_report<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write report")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync report")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist report: {}", path.display()))?;

    Ok(())
}
