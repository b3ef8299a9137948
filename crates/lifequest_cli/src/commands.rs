//! Line command parsing for the interactive session.

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `xp = None` asks the suggester for a reward.
    Add { title: String, xp: Option<u32> },
    Suggest { title: String },
    List,
    /// 1-based position in the task list.
    Done { index: usize },
    Delete { index: usize },
    Profile,
    Badges,
    Leaderboard,
    Prefill,
    Reset,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
commands:
  add [xp] <title>   add a task (xp suggested from the title when omitted)
  suggest <title>    show the suggested xp for a title
  list               list tasks
  done <n>           complete task n for today
  delete <n>         delete task n
  profile            show level, xp, coins and streak
  badges             show unlocked badges
  leaderboard        show the demo leaderboard
  prefill            add sample tasks when the list is empty
  reset              reset progress (tasks are kept)
  help               show this help
  quit               end the session";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest)?,
        "suggest" => Command::Suggest {
            title: rest.to_string(),
        },
        "list" | "ls" => Command::List,
        "done" | "complete" => Command::Done {
            index: parse_index(rest)?,
        },
        "delete" | "rm" => Command::Delete {
            index: parse_index(rest)?,
        },
        "profile" => Command::Profile,
        "badges" => Command::Badges,
        "leaderboard" => Command::Leaderboard,
        "prefill" => Command::Prefill,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

fn parse_add(rest: &str) -> Result<Command, String> {
    if rest.is_empty() {
        return Err("please enter a task title".to_string());
    }

    if let Some((first, title)) = rest.split_once(char::is_whitespace) {
        if let Ok(xp) = first.parse::<u32>() {
            return Ok(Command::Add {
                title: title.trim().to_string(),
                xp: Some(xp),
            });
        }
    }

    Ok(Command::Add {
        title: rest.to_string(),
        xp: None,
    })
}

fn parse_index(rest: &str) -> Result<usize, String> {
    match rest.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(format!("expected a task number, got `{rest}`")),
    }
}
