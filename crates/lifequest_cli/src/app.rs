//! Interactive session: dispatches parsed commands to the progression service.
//!
//! # Responsibility
//! - Render tasks, profile, badges and the demo leaderboard as plain text.
//! - Translate 1-based list positions into task ids.
//!
//! # Invariants
//! - Every state change goes through `ProgressionService`.
//! - Core errors are shown as notices and never end the session.

use crate::commands::{Command, HELP_TEXT};
use crate::leaderboard::synthetic_leaderboard;
use crate::suggest::XpSuggester;
use lifequest_core::{
    BadgeId, InMemoryTaskRepository, ProgressionService, ServiceResult, TaskId,
};
use std::io::{self, Write};

pub struct App {
    service: ProgressionService<InMemoryTaskRepository>,
    suggester: Box<dyn XpSuggester>,
}

impl App {
    pub fn new(
        service: ProgressionService<InMemoryTaskRepository>,
        suggester: Box<dyn XpSuggester>,
    ) -> Self {
        Self { service, suggester }
    }

    /// Runs one command. Returns `Ok(false)` when the session should end.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        match command {
            Command::Add { title, xp } => {
                let xp = xp.unwrap_or_else(|| self.suggester.suggest(&title));
                match self.service.add_task(&title, xp) {
                    Ok(task) => writeln!(out, "Task added with {} XP!", task.xp)?,
                    Err(err) => writeln!(out, "Rejected: {err}")?,
                }
            }
            Command::Suggest { title } => {
                let xp = self.suggester.suggest(&title);
                writeln!(out, "Suggested XP based on task type: {xp} XP")?;
            }
            Command::List => self.render_tasks(out)?,
            Command::Done { index } => match self.task_at(index) {
                Ok(Some(id)) => self.complete(id, out)?,
                Ok(None) => writeln!(out, "No task #{index}.")?,
                Err(err) => writeln!(out, "Error: {err}")?,
            },
            Command::Delete { index } => match self.task_at(index) {
                Ok(Some(id)) => match self.service.delete_task(id) {
                    Ok(()) => writeln!(out, "Task removed.")?,
                    Err(err) => writeln!(out, "Error: {err}")?,
                },
                Ok(None) => writeln!(out, "No task #{index}.")?,
                Err(err) => writeln!(out, "Error: {err}")?,
            },
            Command::Profile => self.render_profile(out)?,
            Command::Badges => self.render_badges(out)?,
            Command::Leaderboard => {
                let user = self.service.user_snapshot();
                writeln!(out, "Leaderboard (demo)")?;
                for entry in synthetic_leaderboard(&user.name, user.xp) {
                    writeln!(out, "{}. {} — {} XP", entry.rank, entry.name, entry.xp)?;
                }
            }
            Command::Prefill => match self.service.prefill_sample_tasks() {
                Ok(Some(new_badges)) => {
                    writeln!(out, "Sample tasks added.")?;
                    announce_badges(&new_badges, out)?;
                }
                Ok(None) => writeln!(out, "Tasks already present.")?,
                Err(err) => writeln!(out, "Error: {err}")?,
            },
            Command::Reset => {
                self.service.reset_progress();
                writeln!(out, "Progress reset.")?;
            }
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn task_at(&self, index: usize) -> ServiceResult<Option<TaskId>> {
        let tasks = self.service.list_tasks()?;
        Ok(index
            .checked_sub(1)
            .and_then(|position| tasks.get(position))
            .map(|task| task.id))
    }

    fn complete(&mut self, id: TaskId, out: &mut impl Write) -> io::Result<()> {
        let result = match self.service.complete_task_now(id) {
            Ok(result) => result,
            Err(err) => return writeln!(out, "Error: {err}"),
        };
        if result.already_done {
            return writeln!(out, "You've already completed this task today.");
        }

        writeln!(
            out,
            "+{} XP, +{} coins — good job!",
            result.xp_awarded, result.coins_awarded
        )?;
        announce_badges(&result.new_badges, out)
    }

    fn render_tasks(&self, out: &mut impl Write) -> io::Result<()> {
        let tasks = match self.service.list_tasks() {
            Ok(tasks) => tasks,
            Err(err) => return writeln!(out, "Error: {err}"),
        };
        if tasks.is_empty() {
            return writeln!(out, "No tasks yet — add a task to get going!");
        }
        for (index, task) in tasks.iter().enumerate() {
            writeln!(
                out,
                "{}. {} (XP: {} • Created: {})",
                index + 1,
                task.title,
                task.xp,
                task.created.format("%Y-%m-%d")
            )?;
        }
        Ok(())
    }

    fn render_profile(&self, out: &mut impl Write) -> io::Result<()> {
        let user = self.service.user_snapshot();
        let progress = self.service.level_progress();
        writeln!(out, "Name: {}", user.name)?;
        writeln!(out, "Level: {}", progress.level)?;
        writeln!(
            out,
            "XP: {} (need {} to next level, {:.0}% through level)",
            user.xp,
            progress.xp_to_next_level(),
            progress.fraction() * 100.0
        )?;
        writeln!(out, "Coins: {}", user.coins)?;
        writeln!(out, "Streak: {} days", user.streak)
    }

    fn render_badges(&self, out: &mut impl Write) -> io::Result<()> {
        let user = self.service.user_snapshot();
        if user.badges.is_empty() {
            return writeln!(out, "No badges yet — keep completing tasks to earn rewards!");
        }
        for badge in &user.badges {
            writeln!(out, "[{}] {}", badge.tier(), badge.label())?;
        }
        Ok(())
    }
}

fn announce_badges(badges: &[BadgeId], out: &mut impl Write) -> io::Result<()> {
    for badge in badges {
        writeln!(out, "Badge unlocked: {} ({})", badge.label(), badge.tier())?;
    }
    Ok(())
}
