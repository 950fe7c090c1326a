//! Interactive text menu
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so the same
//! loop serves stdin/stdout and tests. Store snapshots are taken first and
//! written afterwards; the store lock is never held while printing or
//! waiting for input.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crate::console::format_message;
use crate::sender::Roster;
use crate::store::{Message, MessageStore};
use crate::utils::error::Result;

const MENU: &str = "\n--- Chat Menu ---\n\
1. Send Message\n\
2. Display All Messages\n\
3. Search by User ID\n\
4. Search by Keyword\n\
5. Display All User IDs\n\
6. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Send,
    DisplayAll,
    SearchUser,
    SearchKeyword,
    ListUsers,
    Exit,
}

impl Choice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::Send),
            2 => Some(Self::DisplayAll),
            3 => Some(Self::SearchUser),
            4 => Some(Self::SearchKeyword),
            5 => Some(Self::ListUsers),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, R, W> {
    store: Arc<MessageStore>,
    roster: &'a Roster,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: Arc<MessageStore>, roster: &'a Roster, input: R, output: W) -> Self {
        Self {
            store,
            roster,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}Enter your choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\nExiting chat...")?;
                return Ok(());
            };

            let Ok(number) = line.trim().parse::<u32>() else {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                continue;
            };

            match Choice::from_number(number) {
                Some(Choice::Send) => self.send()?,
                Some(Choice::DisplayAll) => {
                    let all = self.store.all_messages();
                    self.print_section(
                        "--- Message History ---",
                        &all,
                        "------------------------",
                    )?;
                }
                Some(Choice::SearchUser) => {
                    let Some(id) = self.prompt_id("Enter User ID to search: ")? else {
                        continue;
                    };
                    let found = self.store.find_by_participant(&id);
                    self.print_section(
                        &format!("--- Messages for User: {id} ---"),
                        &found,
                        "-----------------------------",
                    )?;
                }
                Some(Choice::SearchKeyword) => {
                    let Some(keyword) = self.prompt("Enter keyword to search: ")? else {
                        continue;
                    };
                    let found = self.store.find_by_keyword(&keyword);
                    self.print_section(
                        &format!("--- Messages containing keyword: \"{keyword}\" ---"),
                        &found,
                        "---------------------------------------------",
                    )?;
                }
                Some(Choice::ListUsers) => {
                    writeln!(self.output, "\n--- Available User IDs ---")?;
                    for id in self.roster.ids() {
                        writeln!(self.output, "{id}")?;
                    }
                    writeln!(self.output, "---------------------------")?;
                }
                Some(Choice::Exit) => {
                    writeln!(self.output, "Exiting chat...")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn send(&mut self) -> Result<()> {
        let Some(sender_id) = self.prompt_id("Enter Sender ID: ")? else {
            return Ok(());
        };
        let Some(recipient) = self.prompt_id("Enter Recipient ID: ")? else {
            return Ok(());
        };
        let Some(content) = self.prompt("Enter Message: ")? else {
            return Ok(());
        };

        match self.roster.find(&sender_id) {
            Some(sender) => {
                let sent = sender.send(&recipient, &content);
                writeln!(self.output, "{}", format_message(&sent))?;
            }
            None => writeln!(self.output, "Sender not found.")?,
        }
        Ok(())
    }

    fn print_section(&mut self, header: &str, messages: &[Message], footer: &str) -> Result<()> {
        writeln!(self.output, "\n{header}")?;
        for msg in messages {
            writeln!(self.output, "{}", format_message(msg))?;
        }
        writeln!(self.output, "{footer}")?;
        Ok(())
    }

    /// Prompts for an identity: the first whitespace-delimited token.
    /// Blank lines are skipped, so an identity is never empty.
    fn prompt_id(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        while let Some(line) = self.read_line()? {
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    /// Prompts for a free-text line, kept as typed minus the line ending.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }
}
