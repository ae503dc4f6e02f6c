use std::str::FromStr;

use common::{Channel, ScenePhase};

/// One line typed into the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Start,
    Stop,
    /// Channel selector segment
    Select(usize),
    Phase(ScenePhase),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "start" => return Ok(Command::Start),
            "stop" => return Ok(Command::Stop),
            "show" => return Ok(Command::Show),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }
        if let Ok(index) = s.parse::<usize>() {
            return Ok(Command::Select(index));
        }
        if let Ok(phase) = s.parse::<ScenePhase>() {
            return Ok(Command::Phase(phase));
        }
        s.parse::<Channel>()
            .map(|channel| Command::Select(channel.index()))
            .map_err(|_| format!("Unknown command {}", s))
    }
}

pub(crate) const HELP: &str = "\
Commands:
  start | stop              begin or halt sampling
  0 | 1 | 2                 select channel (acc, rot, quat also accepted)
  active | inactive | background
                            report a lifecycle phase
  show                      print the latest values
  quit";
