//! Plain-text listings of store and catalog data.

use crate::config::Settings;
use crate::domain::{
    dot_strip, filter_challenges, format_number, format_thousands, points_delta, rank_leaderboard, streak_badge,
    task_check, Category, ChallengeCard, CommunityActivity, GlobalStats, LeaderboardEntry,
    ProfileHighlights,
};
use crate::report::dot_summary;
use crate::store::UserState;
use std::io::{self, Write};

/// Dots shown for a challenge whose duration label does not parse
const FALLBACK_DOTS: usize = 7;

pub fn write_status<W: Write>(out: &mut W, state: &UserState, settings: &Settings) -> io::Result<()> {
    writeln!(
        out,
        "Level {}  |  {} pts  |  streak {} {}",
        state.level(),
        state.points(),
        state.streak(),
        streak_badge(settings.use_emoji)
    )
}

pub fn write_highlights<W: Write>(out: &mut W, highlights: &ProfileHighlights) -> io::Result<()> {
    writeln!(
        out,
        "{} challenges completed, {} kg CO2 saved, {} trees planted, rank #{} (since {})",
        highlights.challenges_completed,
        highlights.co2_saved_kg,
        highlights.trees_planted,
        highlights.rank,
        highlights.join_date
    )
}

pub fn write_tasks<W: Write>(out: &mut W, state: &UserState, settings: &Settings) -> io::Result<()> {
    for task in state.tasks() {
        writeln!(
            out,
            "{} {:>2}. {} (+{}) - {}",
            task_check(task.completed, settings.use_emoji),
            task.id,
            task.title,
            task.points,
            task.description
        )?;
    }
    Ok(())
}

pub fn write_completed<W: Write>(out: &mut W, state: &UserState) -> io::Result<()> {
    if state.completed_tasks().is_empty() {
        return writeln!(out, "Nothing completed yet.");
    }
    for task in state.completed_tasks() {
        writeln!(out, "{:>2}. {} (+{})", task.id, task.title, task.points)?;
    }
    Ok(())
}

pub fn write_activity<W: Write>(out: &mut W, state: &UserState) -> io::Result<()> {
    for entry in state.recent_activities() {
        writeln!(
            out,
            "#{:<3} {:<40} {:>6}  {}",
            entry.id,
            entry.action,
            points_delta(entry.points),
            entry.date
        )?;
    }
    Ok(())
}

pub fn write_progress<W: Write>(
    out: &mut W,
    state: &UserState,
    catalog: &[ChallengeCard],
    settings: &Settings,
) -> io::Result<()> {
    let summaries = dot_summary(state, catalog);
    if summaries.is_empty() {
        return writeln!(out, "No challenge progress yet.");
    }

    for summary in summaries {
        let Some(trail) = state.challenge_progress().trail(summary.challenge_id) else {
            continue;
        };
        let width = summary
            .days
            .map(|days| days as usize)
            .unwrap_or(FALLBACK_DOTS)
            .max(summary.span);
        writeln!(
            out,
            "{:>2}. {:<24} {}  {} marked",
            summary.challenge_id,
            summary.title,
            dot_strip(trail, width, settings.use_emoji),
            summary.marked
        )?;
    }
    Ok(())
}

pub fn write_challenges<W: Write>(out: &mut W, catalog: &[ChallengeCard], category: Category) -> io::Result<()> {
    let cards = filter_challenges(catalog, category);
    writeln!(out, "{} challenges ({})", category.name(), cards.len())?;
    for card in cards {
        let status = if card.completed { " [done]" } else { "" };
        writeln!(
            out,
            "{:>2}. {}{} - {} pts, {}, {}, {} participants",
            card.id,
            card.title,
            status,
            card.points,
            card.difficulty.name(),
            card.duration,
            format_thousands(u64::from(card.participants))
        )?;
        writeln!(out, "    {}", card.description)?;
    }
    Ok(())
}

pub fn write_community<W: Write>(
    out: &mut W,
    global: &GlobalStats,
    leaderboard: &[LeaderboardEntry],
    feed: &[CommunityActivity],
    your_points: i64,
) -> io::Result<()> {
    writeln!(out, "Community impact")?;
    writeln!(out, "  members        {}", format_number(global.total_users))?;
    writeln!(out, "  CO2 saved      {} kg", format_number(global.co2_saved_kg))?;
    writeln!(out, "  trees planted  {}", format_number(global.trees_planted))?;
    writeln!(out, "  waste reduced  {} kg", format_number(global.waste_reduced_kg))?;

    writeln!(out)?;
    writeln!(out, "Leaderboard")?;
    for row in rank_leaderboard(leaderboard, your_points) {
        let marker = if row.is_you() { ">" } else { " " };
        writeln!(
            out,
            "{}{:>2}. {} {:<14} {:>6} pts  level {}",
            marker, row.rank, row.entry.avatar, row.entry.name, row.entry.points, row.entry.level
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Recent community activity")?;
    for item in feed {
        writeln!(
            out,
            "  {} {} {} (+{}, {})",
            item.avatar, item.user, item.action, item.points, item.time
        )?;
    }
    Ok(())
}
