use crate::core::address::Address;
use crate::core::errors::{Error, Result};
use crate::core::interval_set::IntervalSet;
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  CSV Persistence
-------------------------------------------------------------------------------------------------*/

// Rows are `left,right,name,url` with no header.
const FIELDS: usize = 4;

impl IntervalSet {
    /*-------------------------------------------------------------------------
      Import
    -------------------------------------------------------------------------*/

    /// Read a complete set from CSV rows of `left,right,name,url`.
    ///
    /// Fails on the first malformed row, or when the rows overlap, with the offending line number.
    pub fn from_csv<R: Read>(reader: R) -> Result<IntervalSet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut set = IntervalSet::new();
        let mut lines: Vec<(Address, u64)> = Vec::new();
        let mut record = csv::StringRecord::new();
        while csv_reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |position| position.line());

            if record.len() != FIELDS {
                return Err(Error::MalformedRecord {
                    line,
                    reason: format!("expected {} fields but got {}", FIELDS, record.len()),
                });
            }

            set.add_range(&record[0], &record[1], &record[2], &record[3])
                .map_err(|error| Error::Line {
                    line,
                    source: Box::new(error),
                })?;
            if let Some(interval) = set.intervals().last() {
                lines.push((*interval.left(), line));
            }
        }

        set.normalize().map_err(|error| match overlap_line(&lines, &error) {
            Some(line) => Error::Line {
                line,
                source: Box::new(error),
            },
            None => error,
        })?;
        Ok(set)
    }

    /// Replace this set's contents with the CSV rows read from `reader`.
    ///
    /// The set is untouched unless every row loads and the result normalizes.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        *self = IntervalSet::from_csv(reader)?;
        Ok(())
    }

    /// Load a set from the CSV file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<IntervalSet> {
        let file = File::open(path.as_ref())?;
        let set = IntervalSet::from_csv(file)?;
        info!("Loaded {} entries from {:?}", set.len(), path.as_ref());
        Ok(set)
    }

    /*-------------------------------------------------------------------------
      Export
    -------------------------------------------------------------------------*/

    /// Normalize, then write one `left,right,name,url` row per interval in address order.
    pub fn export_csv<W: Write>(&mut self, writer: W) -> Result<()> {
        self.normalize()?;

        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for interval in self.intervals() {
            csv_writer.write_record([
                interval.left().to_string().as_str(),
                interval.right().to_string().as_str(),
                interval.name(),
                interval.url(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Save the set to the CSV file at `path`, replacing the file.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        // Overlaps must fail before the file is truncated
        self.normalize()?;

        let file = File::create(path.as_ref())?;
        self.export_csv(file)?;
        info!("Saved {} entries to {:?}", self.len(), path.as_ref());
        Ok(())
    }
}

/// Line of the later row in an overlapping pair (the last row starting at its left bound).
fn overlap_line(lines: &[(Address, u64)], error: &Error) -> Option<u64> {
    match error {
        Error::OverlappingRanges { later, .. } => lines
            .iter()
            .rev()
            .find(|(left, _)| left == later.left())
            .map(|(_, line)| *line),
        _ => None,
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
