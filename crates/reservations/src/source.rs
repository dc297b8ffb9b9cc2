//! Splitting of the reservation file into raw fields.
//!
//! This module knows nothing about field types: it turns each non-blank line
//! into a [`RawRecord`] of exactly [`FIELD_COUNT`] strings. Conversion lives in
//! [`crate::reservation`].
//!
//! # Format
//!
//! ```text
//! 201|Moomin Valley|moomin@whitevalley.org|0509876543|2025-11-12|09:00|2|18.50|True|Forest Area 1|2025-08-12 14:33:20
//! ```
//!
//! There is no header line and no quoting: a `"` is an ordinary character.

use std::io::{BufRead, BufReader, Read};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{
    error::{ParseError, ParseResult},
    schema::{Column, FIELD_COUNT},
};

/// Field delimiter of the reservation file.
pub const DELIMITER: u8 = b'|';

/// One line of the source split into its raw, untyped fields.
#[derive(Debug, Clone)]
pub struct RawRecord {
    fields: StringRecord,
    line: u64,
}

impl RawRecord {
    /// Builds a record from already split fields.
    ///
    /// Fails with [`ParseError::MalformedLine`] unless there are exactly
    /// [`FIELD_COUNT`] fields.
    pub fn new<I, T>(fields: I, line: u64) -> ParseResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::from_string_record(fields.into_iter().collect(), line)
    }

    /// Splits a single line (without its terminator) on [`DELIMITER`].
    ///
    /// # Example
    ///
    /// ```
    /// use reservations::{schema::Column, source::RawRecord};
    ///
    /// let raw = RawRecord::parse_line("1|A|a@b|0|2025-01-01|10:00|1|1.0|True|Room|2025-01-01 00:00:00", 1)?;
    /// assert_eq!(raw.get(Column::Name), "A");
    /// # Ok::<(), reservations::ParseError>(())
    /// ```
    pub fn parse_line(line: &str, number: u64) -> ParseResult<Self> {
        split_line(line, number)
    }

    fn from_string_record(fields: StringRecord, line: u64) -> ParseResult<Self> {
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::MalformedLine {
                line,
                expected: FIELD_COUNT,
                actual: fields.len(),
            });
        }
        Ok(Self { fields, line })
    }

    /// Raw text of a column.
    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        // Length is checked on construction.
        &self.fields[column.index()]
    }

    /// Line number in the source (1-based).
    #[must_use]
    pub fn line(&self) -> u64 {
        self.line
    }

    /// All fields in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter()
    }
}

/// Streaming reader of [`RawRecord`]s.
///
/// Blank lines are skipped. Iteration stops after the first I/O error;
/// a malformed line is reported and reading continues with the next line,
/// so the caller decides whether to abort.
pub struct RawRecordReader<R> {
    inner: BufReader<R>,
    /// Number of lines consumed so far, blank ones included.
    lines_read: u64,
    finished: bool,
}

impl<R: Read> RawRecordReader<R> {
    /// Creates a reader. The input is wrapped in a [`BufReader`].
    pub fn new(reader: R) -> Self {
        Self { inner: BufReader::new(reader), lines_read: 0, finished: false }
    }

    /// Number of source lines consumed so far.
    #[must_use]
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Reads the next non-blank line. Returns `Ok(None)` at EOF.
    fn read_one(&mut self) -> ParseResult<Option<RawRecord>> {
        let mut line = String::new();

        loop {
            line.clear();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.lines_read += 1;
            if !line.trim_end_matches(['\n', '\r']).is_empty() {
                break;
            }
        }

        let content = line.trim_end_matches(['\n', '\r']);
        split_line(content, self.lines_read).map(Some)
    }
}

impl<R: Read> Iterator for RawRecordReader<R> {
    type Item = ParseResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_one() {
            Ok(Some(raw)) => Some(Ok(raw)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e @ ParseError::MalformedLine { .. }) => Some(Err(e)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Splits one line (without terminator) into fields with the `csv` reader.
fn split_line(content: &str, line: u64) -> ParseResult<RawRecord> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::None)
        .from_reader(content.as_bytes());

    let mut fields = StringRecord::new();
    if !reader.read_record(&mut fields)? {
        return Err(ParseError::MalformedLine { line, expected: FIELD_COUNT, actual: 0 });
    }
    RawRecord::from_string_record(fields, line)
}
