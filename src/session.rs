//! Replaying ability commands against a book and rendering the results.

use std::io::{BufRead, BufReader, Read, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use anyhow::{Context, Error};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use abilities::{Ability, AbilityBook};
use reachability::Traversable;

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("Can't parse command {0:?}")]
    Unparseable(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {0} requires an ability id")]
    MissingAbility(&'static str),

    #[error("Command {0} takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String, #[source] ParseIntError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Earn(u64),
    Learn(String),
    Forget(String),
    ForgetAll,
    Status,
    Info(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*(?P<cmd>[a-z-]+)(?:\s+(?P<arg>\S+))?\s*$").unwrap();
        }

        let cap = RE
            .captures(s)
            .ok_or_else(|| CommandError::Unparseable(s.to_string()))?;
        let arg = cap.name("arg").map(|m| m.as_str().to_string());

        let ability = |name: &'static str| arg.clone().ok_or(CommandError::MissingAbility(name));
        let bare = |name: &'static str, command: Command| match arg {
            Some(_) => Err(CommandError::UnexpectedArgument(name)),
            None => Ok(command),
        };

        match &cap["cmd"] {
            "earn" => match &arg {
                Some(amount) => amount
                    .parse()
                    .map(Command::Earn)
                    .map_err(|e| CommandError::InvalidAmount(amount.clone(), e)),
                None => Ok(Command::Earn(1)),
            },
            "learn" => ability("learn").map(Command::Learn),
            "forget" => ability("forget").map(Command::Forget),
            "info" => ability("info").map(Command::Info),
            "forget-all" => bare("forget-all", Command::ForgetAll),
            "status" => bare("status", Command::Status),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Applies commands to an [AbilityBook], writing a text rendering of each
/// outcome. Refused learn/forget requests are reported, not fatal.
pub(crate) struct Session<W> {
    book: AbilityBook<String>,
    out: W,
}

impl<W: Write> Session<W> {
    pub(crate) fn new(book: AbilityBook<String>, out: W) -> Self {
        Self { book, out }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (AbilityBook<String>, W) {
        (self.book, self.out)
    }

    /// Run every command in `input`. Blank lines and lines starting with
    /// `#` are skipped.
    pub(crate) fn run<R: Read>(&mut self, input: R) -> Result<(), Error> {
        let reader = BufReader::new(input);

        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let command: Command = trimmed
                .parse()
                .with_context(|| format!("Line {}", n + 1))?;
            self.execute(&command)?;
        }

        Ok(())
    }

    pub(crate) fn execute(&mut self, command: &Command) -> Result<(), Error> {
        debug!(?command, "executing");

        match command {
            Command::Earn(amount) => {
                self.book.earn(*amount);
                writeln!(self.out, "Score: {}", self.book.score())?;
            }
            Command::Learn(id) => match self.book.learn(id) {
                Ok(()) => {
                    let ability = self.lookup(id)?;
                    writeln!(
                        self.out,
                        "Learned {} for {}. Score: {}",
                        ability.title(),
                        ability.price(),
                        self.book.score()
                    )?;
                }
                Err(e) => writeln!(self.out, "Cannot learn {}: {}", id, e)?,
            },
            Command::Forget(id) => match self.book.forget(id) {
                Ok(()) => {
                    let ability = self.lookup(id)?;
                    writeln!(
                        self.out,
                        "Forgot {}, refunded {}. Score: {}",
                        ability.title(),
                        ability.price(),
                        self.book.score()
                    )?;
                }
                Err(e) => writeln!(self.out, "Cannot forget {}: {}", id, e)?,
            },
            Command::ForgetAll => {
                let refund = self.book.forget_all();
                writeln!(
                    self.out,
                    "Forgot everything, refunded {}. Score: {}",
                    refund,
                    self.book.score()
                )?;
            }
            Command::Status => self.status()?,
            Command::Info(id) => self.info(id)?,
        }

        Ok(())
    }

    fn lookup(&self, id: &String) -> Result<Ability<String>, Error> {
        self.book
            .ability(id)
            .map(|a| (**a).clone())
            .ok_or_else(|| abilities::AbilityError::Unknown(id.clone()).into())
    }

    fn status(&mut self) -> Result<(), Error> {
        let learned: Vec<String> = self
            .book
            .learned()
            .iter()
            .map(|a| a.id().to_string())
            .collect();

        writeln!(self.out, "Score: {}", self.book.score())?;
        writeln!(self.out, "Learned: {}", learned.join(", "))?;
        Ok(())
    }

    fn info(&mut self, id: &String) -> Result<(), Error> {
        let ability = match self.book.ability(id) {
            Some(a) => a.clone(),
            None => {
                writeln!(self.out, "Unknown ability: {}", id)?;
                return Ok(());
            }
        };
        let links = self.book.links(id).unwrap_or(&[]).join(", ");

        writeln!(self.out, "{} ({})", ability.title(), id)?;
        writeln!(self.out, "  {}", ability.description())?;
        if !ability.is_learned() {
            writeln!(self.out, "  Price: {}", ability.price())?;
        }
        writeln!(self.out, "  Learned: {}", yes_no(ability.is_learned()))?;
        writeln!(self.out, "  Can learn: {}", yes_no(self.book.can_learn(id)))?;
        writeln!(self.out, "  Can forget: {}", yes_no(self.book.can_forget(id)))?;
        writeln!(self.out, "  Links: {}", links)?;
        Ok(())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
