//! Interactive budgeting session
//!
//! Reads one command per line, applies it to a [`BudgetSession`] and prints
//! the result. A failing command reports its error and leaves the session
//! as it was; only `quit` or end of input ends the loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use super::export::{load_document, write_artifact, FormatArg};
use crate::catalog::{catalog, strings};
use crate::config::{FinanthropePaths, Settings};
use crate::display::{format_categories, format_summary};
use crate::error::{FinanthropeError, FinanthropeResult};
use crate::models::{Locale, Money, Section};
use crate::session::BudgetSession;

const PROMPT: &str = "finanthrope> ";

const HELP: &str = "\
Commands:
  add <section>                       Add a row with the section's default type
  remove <section> <row>              Delete a row
  type <section> <row> <label|key>    Change a row's type
  amount <section> <row> <value>      Change a row's monthly amount
  show                                Print every section and the totals
  reset                               Clear all sections
  lang <fr|en>                        Switch the display language
  categories [section]                List the available types
  load <file>                         Replace the budget with a saved document
  export <json|yaml|csv|pdf|svg> [path]
                                      Write an export file
  help                                Show this help
  quit                                Leave the session

Sections: income, daily_expenses, admin_expenses, family_expenses, loans, taxes
          (daily, admin and family are accepted as short forms)";

#[derive(Parser, Debug)]
#[command(
    name = "finanthrope",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands accepted by the session
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Add {
        section: Section,
    },
    #[command(alias = "rm")]
    Remove {
        section: Section,
        row: usize,
    },
    Type {
        section: Section,
        row: usize,
        /// Label in the current language, or a category key
        #[arg(required = true, num_args = 1..)]
        label: Vec<String>,
    },
    Amount {
        section: Section,
        row: usize,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    #[command(alias = "ls")]
    Show,
    Reset,
    Lang {
        locale: Locale,
    },
    Categories {
        section: Option<Section>,
    },
    Load {
        path: PathBuf,
    },
    Export {
        #[arg(value_enum)]
        format: FormatArg,
        path: Option<PathBuf>,
    },
    Help,
    #[command(aliases = ["exit", "q"])]
    Quit,
}

/// Whether the loop goes on after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line; `None` for blank lines and comments
pub fn parse_line(line: &str) -> FinanthropeResult<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = shlex::split(line)
        .ok_or_else(|| FinanthropeError::Usage("Unbalanced quotes".into()))?;
    ShellLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| FinanthropeError::Usage(e.to_string().trim_end().to_string()))
}

/// A session bound to the user's configuration
pub struct Shell<'a> {
    session: BudgetSession,
    paths: &'a FinanthropePaths,
    settings: &'a Settings,
}

impl<'a> Shell<'a> {
    pub fn new(locale: Locale, paths: &'a FinanthropePaths, settings: &'a Settings) -> Self {
        Self {
            session: BudgetSession::new(locale),
            paths,
            settings,
        }
    }

    pub fn session(&self) -> &BudgetSession {
        &self.session
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> FinanthropeResult<()> {
        let text = strings(self.session.locale());
        writeln!(out, "{}\n{}\nType 'help' for commands.", text.app_title, text.app_subtitle)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(out, "Error: {}", e)?;
                }
            }
        }
        writeln!(out)?;
        Ok(())
    }

    /// Parse and execute one line
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> FinanthropeResult<Flow> {
        match parse_line(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        }
    }

    /// Execute one command
    pub fn execute<W: Write>(
        &mut self,
        command: ShellCommand,
        out: &mut W,
    ) -> FinanthropeResult<Flow> {
        debug!(?command, "executing");
        let locale = self.session.locale();
        let currency = self.settings.currency_symbol.as_str();

        match command {
            ShellCommand::Add { section } => {
                let row = self.session.store_mut().add_entry(section);
                let entry = self.session.store().entries(section)[row];
                writeln!(
                    out,
                    "Added row {} to {} ({})",
                    row,
                    section,
                    catalog().label_or_key(locale, section, entry.category_key())
                )?;
            }
            ShellCommand::Remove { section, row } => {
                self.session.store_mut().remove_entry(section, row)?;
                writeln!(out, "Removed row {} from {}", row, section)?;
            }
            ShellCommand::Type {
                section,
                row,
                label,
            } => {
                let input = label.join(" ");
                self.session.select_category(section, row, &input)?;
                let key = self.session.store().entries(section)[row].category_key();
                writeln!(
                    out,
                    "{} row {}: {}",
                    section,
                    row,
                    catalog().label_or_key(locale, section, key)
                )?;
            }
            ShellCommand::Amount {
                section,
                row,
                value,
            } => {
                let money = Money::parse(&value)
                    .map_err(|_| FinanthropeError::InvalidAmount(value.clone()))?;
                self.session.store_mut().set_money(section, row, money)?;
                writeln!(
                    out,
                    "{} row {}: {}",
                    section,
                    row,
                    money.format_with_symbol(currency)
                )?;
            }
            ShellCommand::Show => {
                let summary = format_summary(&self.session.snapshot(), locale, currency)?;
                write!(out, "{}", summary)?;
            }
            ShellCommand::Reset => {
                self.session.store_mut().reset_all();
                writeln!(out, "All sections cleared")?;
            }
            ShellCommand::Lang { locale } => {
                self.session.set_locale(locale);
                writeln!(out, "{}", strings(locale).app_title)?;
            }
            ShellCommand::Categories { section } => {
                write!(out, "{}", format_categories(locale, section))?;
            }
            ShellCommand::Load { path } => {
                let document = load_document(&path)?;
                self.session = BudgetSession::from_document(&document)?;
                let rows = self.session.store().sections().row_count();
                writeln!(out, "Loaded {} ({} rows)", path.display(), rows)?;
            }
            ShellCommand::Export { format, path } => {
                let written = write_artifact(
                    &self.session.snapshot(),
                    locale,
                    format.into(),
                    self.paths,
                    self.settings,
                    path,
                )?;
                writeln!(out, "Exported to: {}", written.display())?;
            }
            ShellCommand::Help => {
                writeln!(out, "{}", HELP)?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

/// Handle `finanthrope shell` on the process's stdin/stdout
pub fn handle_shell_command(
    paths: &FinanthropePaths,
    settings: &Settings,
    locale: Locale,
) -> FinanthropeResult<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(locale, paths, settings);
    shell.run(stdin.lock(), &mut stdout.lock())
}
