//! Field tokenizer for delimiter-separated cell tables.
//!
//! Records are read left to right: a numeric field, then one separator
//! character, then the next field. The separator may be any single
//! character that cannot start a number; the first one seen in a table
//! fixes it for the rest of that table. Whitespace around fields is ignored.
//!
//! Variable-width layouts (a count followed by that many fields) are read
//! with [`FieldReader::counted_list`], so the position of every later field
//! depends on the counts read before it.

use std::path::Path;
use std::str::FromStr;

use crate::mesh_error::MeshImportError;

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

/// Per-table tokenizer state.
#[derive(Debug)]
pub struct Tokenizer<'p> {
    path: &'p Path,
    separator: Option<char>,
}

impl<'p> Tokenizer<'p> {
    /// Creates a tokenizer for the table at `path` (used in error messages).
    pub fn new(path: &'p Path) -> Self {
        Self {
            path,
            separator: None,
        }
    }

    /// Separator fixed by the records read so far.
    pub fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Starts reading record `line` (1-based line number in the file).
    pub fn record<'t, 'l>(&'t mut self, line: usize, text: &'l str) -> FieldReader<'t, 'l, 'p> {
        FieldReader {
            tokenizer: self,
            line,
            rest: text,
            fields_read: 0,
        }
    }
}

/// Reads the fields of a single record.
#[derive(Debug)]
pub struct FieldReader<'t, 'l, 'p> {
    tokenizer: &'t mut Tokenizer<'p>,
    line: usize,
    rest: &'l str,
    fields_read: usize,
}

impl FieldReader<'_, '_, '_> {
    fn malformed(&self, reason: String) -> MeshImportError {
        MeshImportError::MalformedRecord {
            path: self.tokenizer.path.to_path_buf(),
            line: self.line,
            reason,
        }
    }

    fn consume_separator(&mut self, what: &str) -> Result<(), MeshImportError> {
        let trimmed = self.rest.trim_start();
        let mut chars = trimmed.chars();
        let sep = match chars.next() {
            Some(c) if !is_numeric_char(c) => c,
            Some(c) => {
                return Err(self.malformed(format!(
                    "expected a separator before {what}, found `{c}`"
                )));
            }
            None => {
                return Err(self.malformed(format!("record ends before {what}")));
            }
        };
        match self.tokenizer.separator {
            Some(expected) if expected != sep => {
                return Err(self.malformed(format!(
                    "separator `{sep}` differs from `{expected}` used earlier"
                )));
            }
            Some(_) => {}
            None => self.tokenizer.separator = Some(sep),
        }
        self.rest = chars.as_str();
        Ok(())
    }

    /// Parses the next field as `T`. `what` names the field in errors.
    pub fn field<T>(&mut self, what: &str) -> Result<T, MeshImportError>
    where
        T: FromStr,
    {
        if self.fields_read > 0 {
            self.consume_separator(what)?;
        }
        let trimmed = self.rest.trim_start();
        let end = trimmed
            .find(|c: char| !is_numeric_char(c))
            .unwrap_or(trimmed.len());
        let token = &trimmed[..end];
        if token.is_empty() {
            return Err(self.malformed(format!("missing {what}")));
        }
        let value = token
            .parse::<T>()
            .map_err(|_| self.malformed(format!("invalid {what}: `{token}`")))?;
        self.rest = &trimmed[end..];
        self.fields_read += 1;
        Ok(value)
    }

    /// Reads a count field followed by that many `T` fields.
    pub fn counted_list<T>(&mut self, what: &str) -> Result<Vec<T>, MeshImportError>
    where
        T: FromStr,
    {
        let count: usize = self.field(&format!("{what} count"))?;
        // Each item needs a separator and at least one character.
        let mut items = Vec::with_capacity(count.min(self.rest.len() / 2 + 1));
        for i in 0..count {
            items.push(self.field(&format!("{what} #{i}"))?);
        }
        Ok(items)
    }

    /// Ends the record, rejecting leftover fields. A single trailing
    /// separator is tolerated.
    pub fn finish(self) -> Result<(), MeshImportError> {
        let mut rest = self.rest.trim();
        if let Some(sep) = self.tokenizer.separator {
            rest = rest.strip_suffix(sep).unwrap_or(rest).trim_end();
            if rest.is_empty() {
                return Ok(());
            }
        }
        if rest.is_empty() {
            Ok(())
        } else {
            Err(self.malformed(format!("unexpected trailing data `{rest}`")))
        }
    }
}
