//! Menu-driven interactive session.
//!
//! The shell reads answers line by line from any [`BufRead`] and writes menus
//! and results to any [`Write`], so a whole session can be scripted. Invalid
//! menu choices are rejected here and never reach the search engine. End of
//! input ends the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::SourceConfig;
use crate::loader::DataSource;
use crate::models::{SearchField, SearchQuery, SearchStrategy, Table};
use crate::present::{self, OutputFormat};
use crate::search;

const INVALID_CHOICE: &str = "Invalid choice!";
const GOODBYE: &str = "Program finished.";

/// Interactive menu session
pub struct Shell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            format: OutputFormat::Plain,
        }
    }

    /// Set the result format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Consume the shell, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one line. Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask where to load data from.
    ///
    /// Choice `2` selects the online sheet; anything else selects the local
    /// file. Empty answers to the follow-up prompt take the configured
    /// default. Returns `None` at end of input or when no sheet URL is given.
    pub fn choose_source(&mut self, defaults: &SourceConfig) -> io::Result<Option<DataSource>> {
        writeln!(self.output, "Choose data source:")?;
        writeln!(self.output, "1. Local file")?;
        writeln!(self.output, "2. Google Sheets online")?;

        let Some(choice) = self.prompt("Enter choice (1/2): ")? else {
            return Ok(None);
        };

        if choice.trim() == "2" {
            let message = match &defaults.sheet_url {
                Some(url) => format!("Google Sheets URL [{}]: ", url),
                None => "Google Sheets URL: ".to_string(),
            };
            let Some(answer) = self.prompt(&message)? else {
                return Ok(None);
            };

            let url = match answer.trim() {
                "" => defaults.sheet_url.clone(),
                url => Some(url.to_string()),
            };
            return Ok(url.map(DataSource::Online));
        }

        let message = format!("File path [{}]: ", defaults.local_path.display());
        let Some(answer) = self.prompt(&message)? else {
            return Ok(None);
        };

        let path = match answer.trim() {
            "" => defaults.local_path.clone(),
            path => PathBuf::from(path),
        };
        Ok(Some(DataSource::Local(path)))
    }

    /// Run the search menu over `table` until the user exits
    pub fn run(&mut self, table: &Table) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== MAIN MENU ===")?;
            writeln!(self.output, "1. Linear Search (partial match)")?;
            writeln!(self.output, "2. Binary Search (partial match)")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Choose search method (1/2/3): ")? else {
                return Ok(());
            };

            let strategy = match choice.trim() {
                "1" => SearchStrategy::Linear,
                "2" => SearchStrategy::Binary,
                "3" => {
                    writeln!(self.output, "{}", GOODBYE)?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            writeln!(self.output)?;
            writeln!(self.output, "Choose search field:")?;
            for (i, field) in SearchField::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, field)?;
            }

            let Some(choice) = self.prompt("Enter choice (1/2/3): ")? else {
                return Ok(());
            };

            let field = match choice.trim() {
                "1" => SearchField::Title,
                "2" => SearchField::Author,
                "3" => SearchField::Year,
                _ => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            let Some(keyword) = self.prompt(&format!("Enter keyword ({}): ", field))? else {
                return Ok(());
            };
            let keyword = keyword.trim();

            let query = SearchQuery::new(keyword).field(field).strategy(strategy);
            let result = search::execute(table, &query);

            writeln!(self.output)?;
            write!(self.output, "{}", present::render(&result, keyword, self.format))?;

            let Some(again) = self.prompt("\nSearch again? (y/n): ")? else {
                return Ok(());
            };
            if !again.trim().eq_ignore_ascii_case("y") {
                writeln!(self.output, "{}", GOODBYE)?;
                return Ok(());
            }
        }
    }
}
