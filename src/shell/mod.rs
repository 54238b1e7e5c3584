//! Line-oriented menu shell over an [`OrderedIndex`].
//!
//! The shell owns everything the index does not: prompting, parsing
//! ids out of text, and formatting records. It reads from any
//! [`BufRead`] and writes to any [`Write`], so tests can drive it with
//! in-memory buffers.

mod menu;

use std::io::{BufRead, Write};

use log::{info, log, Level};

use crate::common::{Error, RecordId, Result};
use crate::index::{InsertOutcome, OrderedIndex, Record};

pub use menu::{InvalidChoice, MenuChoice};

/// Level for logging rejected user input.
///
/// Mistyped ids are already reported on the session output, so they stay
/// below the default filter and never reach stderr mid-session.
pub const INPUT_REJECTION_LEVEL: Level = Level::Debug;

/// Interactive employee-management session.
///
/// # Example
/// ```
/// use employeedb::shell::Shell;
///
/// let input = b"1\n7\nAda\nEngineer\n3\n4\n";
/// let mut output = Vec::new();
/// let mut shell = Shell::new(&input[..], &mut output);
/// shell.run().unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("ID: 7, Name: Ada, Designation: Engineer"));
/// ```
pub struct Shell<R, W> {
    input: R,
    output: W,
    index: OrderedIndex,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an empty index.
    pub fn new(input: R, output: W) -> Self {
        Self::with_index(input, output, OrderedIndex::new())
    }

    /// Create a shell over an existing index.
    pub fn with_index(input: R, output: W, index: OrderedIndex) -> Self {
        Self {
            input,
            output,
            index,
        }
    }

    pub fn index(&self) -> &OrderedIndex {
        &self.index
    }

    /// Consume the shell, handing back the index it built.
    pub fn into_index(self) -> OrderedIndex {
        self.index
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    /// Only I/O failures on the underlying reader or writer. Bad menu
    /// choices and unparsable ids are reported to the user and the loop
    /// continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MenuChoice::MENU)?;
            let line = match self.prompt("Enter your choice: ")? {
                Some(line) => line,
                None => break,
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(InvalidChoice) => {
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                    continue;
                }
            };

            let step = match choice {
                MenuChoice::AddEmployee => self.add_employee(),
                MenuChoice::SearchEmployee => self.search_employee(),
                MenuChoice::DisplayAll => self.display_employees().map(Some),
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting application. Goodbye!")?;
                    break;
                }
            };

            match step {
                Ok(Some(())) => {}
                // Input ran out mid-command.
                Ok(None) => break,
                Err(Error::InvalidRecordId(text)) => {
                    log!(INPUT_REJECTION_LEVEL, "rejected employee id {:?}", text);
                    writeln!(self.output, "{}", Error::InvalidRecordId(text))?;
                }
                Err(e) => return Err(e),
            }
        }

        info!("shell finished: {}", self.index.stats().snapshot());
        self.output.flush()?;
        Ok(())
    }

    fn add_employee(&mut self) -> Result<Option<()>> {
        let id = match self.prompt_id("Enter employee ID: ")? {
            Some(id) => id,
            None => return Ok(None),
        };
        let name = match self.prompt("Enter employee name: ")? {
            Some(name) => name,
            None => return Ok(None),
        };
        let designation = match self.prompt("Enter employee designation: ")? {
            Some(designation) => designation,
            None => return Ok(None),
        };

        match self.index.insert(Record::new(id, name, designation)) {
            InsertOutcome::Inserted => writeln!(self.output, "Employee added successfully.")?,
            InsertOutcome::DuplicateId => {
                writeln!(self.output, "Employee with ID {} already exists.", id)?
            }
        }
        Ok(Some(()))
    }

    fn search_employee(&mut self) -> Result<Option<()>> {
        let id = match self.prompt_id("Enter employee ID to search: ")? {
            Some(id) => id,
            None => return Ok(None),
        };

        match self.index.lookup(id) {
            Some(record) => writeln!(self.output, "Employee found - {}", record)?,
            None => writeln!(self.output, "Employee not found.")?,
        }
        Ok(Some(()))
    }

    fn display_employees(&mut self) -> Result<()> {
        writeln!(self.output, "Employee Records:")?;
        for record in &self.index {
            writeln!(self.output, "{}", record)?;
        }
        Ok(())
    }

    /// Print `message` and read one line, without its line terminator.
    /// `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_id(&mut self, message: &str) -> Result<Option<RecordId>> {
        match self.prompt(message)? {
            Some(line) => line.parse().map(Some),
            None => Ok(None),
        }
    }
}
