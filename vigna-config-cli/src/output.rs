//! Output formatting shared by the listing commands.
//!
//! Every listing is a set of rows under fixed column headers plus a
//! serializable form of the same data. The table and CSV formats print the
//! rows; JSON and YAML serialize the data.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// Output format of listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// CSV format
    Csv,
}

/// Rows of a listing under their column headers.
pub struct Listing<'a, T: Serialize + ?Sized> {
    /// Column headers, lowercase.
    pub headers: &'a [&'a str],
    /// One entry per row, in column order.
    pub rows: Vec<Vec<String>>,
    /// Structured form used by JSON and YAML.
    pub data: &'a T,
}

impl<T: Serialize + ?Sized> Listing<'_, T> {
    /// Print the listing to stdout.
    pub fn print(&self, format: OutputFormat) -> Result<(), CliError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write(format, &mut handle)
    }

    /// Write the listing in the given format.
    pub fn write<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), CliError> {
        match format {
            OutputFormat::Table => self.write_table(out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self.data)?;
                writeln!(out)?;
                Ok(())
            }
            OutputFormat::Yaml => {
                serde_yaml::to_writer(&mut *out, self.data)?;
                Ok(())
            }
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    fn write_table<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        // Print header (uppercase for table display)
        let header_line = self
            .headers
            .iter()
            .map(|s| s.to_uppercase())
            .collect::<Vec<_>>()
            .join("\t");
        writeln!(out, "{header_line}")?;

        for row in &self.rows {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| if cell.is_empty() { "-" } else { cell.as_str() })
                .collect();
            writeln!(out, "{}", cells.join("\t"))?;
        }

        Ok(())
    }

    fn write_csv<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let mut writer = csv::WriterBuilder::new().from_writer(out);
        writer.write_record(self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
