use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};

use crate::session_resources::enrichment::EnrichedSession;
use crate::session_resources::exceptions::AnalyticsExceptions;
use crate::session_resources::session::Session;

const SESSION_COLUMNS: [&str; 4] = ["day", "hobby", "minutes", "mood"];

// How session listings are rendered; scalars always print as `label: value`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Writes report lines to any sink, stdout in the binary and a buffer in tests.
pub struct Reporter<W: Write> {
    pub format: OutputFormat,
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn std_out(format: OutputFormat) -> Self {
        Reporter::new(format, io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn value<T: Display>(&mut self, label: &str, value: T) -> Result<(), AnalyticsExceptions> {
        writeln!(self.out, "{}: {}", label, value)?;
        Ok(())
    }

    pub fn minutes(&mut self, label: &str, minutes: u64) -> Result<(), AnalyticsExceptions> {
        writeln!(self.out, "{}: {} minutes", label, minutes)?;
        Ok(())
    }

    pub fn list(&mut self, label: &str, items: &[String]) -> Result<(), AnalyticsExceptions> {
        match self.format {
            OutputFormat::Table => writeln!(self.out, "{}: [{}]", label, items.join(", "))?,
            OutputFormat::Json => writeln!(self.out, "{}: {}", label, serde_json::to_string(items)?)?,
        }
        Ok(())
    }

    pub fn counts(&mut self, label: &str, counts: &BTreeMap<String, usize>) -> Result<(), AnalyticsExceptions> {
        writeln!(self.out, "{}:", label)?;
        match self.format {
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_titles(Row::new(vec![Cell::new("mood"), Cell::new("count")]));
                for (mood, count) in counts {
                    table.add_row(Row::new(vec![Cell::new(mood), Cell::new(&count.to_string())]));
                }
                table.print(&mut self.out)?;
            }
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string_pretty(counts)?)?,
        }
        Ok(())
    }

    pub fn sessions(&mut self, label: &str, sessions: &[Session]) -> Result<(), AnalyticsExceptions> {
        writeln!(self.out, "{}:", label)?;
        match self.format {
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_titles(title_row(&SESSION_COLUMNS));
                for session in sessions {
                    table.add_row(session_row(session));
                }
                table.print(&mut self.out)?;
            }
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string_pretty(sessions)?)?,
        }
        Ok(())
    }

    pub fn enriched(&mut self, label: &str, sessions: &[EnrichedSession]) -> Result<(), AnalyticsExceptions> {
        writeln!(self.out, "{}:", label)?;
        match self.format {
            OutputFormat::Table => {
                // Every row carries the same derived fields, so the first one names the columns
                let derived_columns: Vec<&str> = sessions
                    .first()
                    .map(|entry| entry.field_names())
                    .unwrap_or_default();

                let mut columns: Vec<&str> = SESSION_COLUMNS.to_vec();
                columns.extend(derived_columns.iter());

                let mut table = Table::new();
                table.set_titles(title_row(&columns));
                for entry in sessions {
                    let mut row = session_row(&entry.session);
                    for column in &derived_columns {
                        let value = entry.get(column).map(|value| value.to_string()).unwrap_or_default();
                        row.add_cell(Cell::new(&value));
                    }
                    table.add_row(row);
                }
                table.print(&mut self.out)?;
            }
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string_pretty(sessions)?)?,
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), AnalyticsExceptions> {
        self.out.flush()?;
        Ok(())
    }
}

fn title_row(columns: &[&str]) -> Row {
    Row::new(columns.iter().map(|column| Cell::new(column)).collect())
}

fn session_row(session: &Session) -> Row {
    Row::new(
        SESSION_COLUMNS
            .iter()
            .map(|column| Cell::new(&session.to_string_for(column).unwrap_or_default()))
            .collect(),
    )
}
