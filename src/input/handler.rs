use super::command::Command;
use crate::config::Settings;
use crate::domain::ChallengeCard;
use crate::output;
use crate::store::UserState;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "\
commands:
  toggle <id>                     complete or undo a task
  dot <challenge> <index>         mark a day of a multi-day challenge
  log <points> <date> <action>    record an activity by hand
  level <n> | streak <n>          set level or streak
  status | tasks | done | activity | progress
  help | quit";

/// Handle one line of session input. Returns true when the session should end.
pub fn handle_line<W: Write>(
    state: &mut UserState,
    catalog: &[ChallengeCard],
    settings: &Settings,
    line: &str,
    out: &mut W,
) -> Result<bool> {
    if line.trim().is_empty() {
        return Ok(false);
    }

    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(e) => {
            debug!(line, error = %e, "rejected session input");
            writeln!(out, "{} (type 'help' for commands)", e)?;
            return Ok(false);
        }
    };

    match command {
        Command::Toggle(task_id) => {
            let before = state.recent_activities().len();
            state.toggle_task(task_id);
            match state.recent_activities().first() {
                Some(entry) if state.recent_activities().len() > before => {
                    writeln!(out, "{} ({} pts)", entry.action, state.points())?;
                }
                _ => writeln!(out, "No task with id {}", task_id)?,
            }
        }
        Command::Dot {
            challenge_id,
            dot_index,
        } => {
            state.mark_dot(challenge_id, dot_index);
            output::write_progress(out, state, catalog, settings)?;
        }
        Command::Log(activity) => {
            state.add_recent_activity(activity);
            output::write_activity(out, state)?;
        }
        Command::Level(level) => {
            state.set_level(level);
            output::write_status(out, state, settings)?;
        }
        Command::Streak(streak) => {
            state.set_streak(streak);
            output::write_status(out, state, settings)?;
        }
        Command::Status => output::write_status(out, state, settings)?,
        Command::Tasks => output::write_tasks(out, state, settings)?,
        Command::Done => output::write_completed(out, state)?,
        Command::Activity => output::write_activity(out, state)?,
        Command::Progress => output::write_progress(out, state, catalog, settings)?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(true),
    }

    Ok(false)
}

/// Drive a session from `input` until it ends or the user quits
pub fn run_session<R: BufRead, W: Write>(
    state: &mut UserState,
    catalog: &[ChallengeCard],
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("session started");
    for line in input.lines() {
        let line = line?;
        if handle_line(state, catalog, settings, &line, out)? {
            break;
        }
        out.flush()?;
    }
    info!(points = state.points(), "session ended");
    Ok(())
}
