//! Delimited text to Markdown table conversion.
//!
//! Input is parsed with the `csv` crate using either a named dialect or one
//! sniffed from the text itself, then rendered as a pipe table.

mod sniffer;

use std::fmt;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;

pub use sniffer::{has_header, sniff};

/// Stand-in for `|` inside cells so it cannot split a column.
pub const PIPE_SUBSTITUTE: char = '\u{2758}';

/// Delimiter and quoting convention of a delimited text blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
    /// Whitespace right after a delimiter is not part of the next field.
    pub skip_initial_space: bool,
}

impl Dialect {
    pub const EXCEL: Self = Self {
        delimiter: b',',
        quote: b'"',
        skip_initial_space: false,
    };

    pub const EXCEL_TAB: Self = Self {
        delimiter: b'\t',
        quote: b'"',
        skip_initial_space: false,
    };

    // Differs from excel only in how it writes; reading is the same.
    pub const UNIX: Self = Self {
        delimiter: b',',
        quote: b'"',
        skip_initial_space: false,
    };

    fn reader<'a>(&self, text: &'a str) -> csv::Reader<&'a [u8]> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .trim(if self.skip_initial_space {
                Trim::Fields
            } else {
                Trim::None
            })
            .from_reader(text.as_bytes())
    }

    /// Parse every record of `text`.
    pub fn read_records(&self, text: &str) -> Result<Vec<Vec<String>>> {
        let mut rows = Vec::new();
        for record in self.reader(text).records() {
            let record = record?;
            rows.push(record.iter().map(ToOwned::to_owned).collect());
        }
        Ok(rows)
    }
}

/// How the dialect of tabular input is chosen.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabularDialect {
    /// Infer delimiter, quoting and header presence from the text.
    #[default]
    Sniff,
    Excel,
    ExcelTab,
    Unix,
}

impl TabularDialect {
    /// The fixed dialect, or `None` when it has to be sniffed.
    pub const fn named(self) -> Option<Dialect> {
        match self {
            Self::Sniff => None,
            Self::Excel => Some(Dialect::EXCEL),
            Self::ExcelTab => Some(Dialect::EXCEL_TAB),
            Self::Unix => Some(Dialect::UNIX),
        }
    }
}

impl fmt::Display for TabularDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sniff => "sniff",
            Self::Excel => "excel",
            Self::ExcelTab => "excel-tab",
            Self::Unix => "unix",
        };
        f.write_str(name)
    }
}

/// Render delimited text as a Markdown table.
///
/// A sniffed dialect also decides whether the first row is a header; an
/// explicit dialect always treats the first row as one.
///
/// # Errors
///
/// Returns a detection error when sniffing fails, or a CSV error when the
/// text cannot be read with the chosen dialect.
pub fn format_table(raw: &str, dialect: TabularDialect) -> Result<String> {
    let text = raw.trim();
    let (dialect, header) = match dialect.named() {
        Some(dialect) => (dialect, true),
        None => {
            let dialect = sniff(text)?;
            let header = has_header(text, &dialect)?;
            (dialect, header)
        }
    };
    tracing::debug!(
        delimiter = %char::from(dialect.delimiter).escape_default(),
        quote = %char::from(dialect.quote),
        header,
        "formatting tabular input"
    );
    let rows = dialect.read_records(text)?;
    Ok(markdown_table(&rows, header))
}

/// Render rows as pipe-table lines, with a `---` separator after the header.
///
/// The separator has one column per header cell. Ragged rows are written
/// with the cells they have.
pub fn markdown_table(rows: &[Vec<String>], header: bool) -> String {
    let columns = rows.first().map_or(0, Vec::len);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, row) in rows.iter().enumerate() {
        if i == 1 && header {
            lines.push(format!("{}|", "| --- ".repeat(columns)));
        }
        let cells = row.iter().map(|cell| escape_cell(cell)).collect::<Vec<_>>();
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines.join("\n")
}

fn escape_cell(cell: &str) -> String {
    cell.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', &PIPE_SUBSTITUTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SIMPLE: &str = "abc,def\nfoo,bar";
    const SIMPLE_TABLE: &str = "| abc | def |\n| --- | --- |\n| foo | bar |";

    #[test]
    fn test_sniffed_simple_csv() {
        assert_eq!(format_table(SIMPLE, TabularDialect::Sniff).unwrap(), SIMPLE_TABLE);
    }

    #[test]
    fn test_explicit_excel_simple_csv() {
        assert_eq!(format_table(SIMPLE, TabularDialect::Excel).unwrap(), SIMPLE_TABLE);
    }

    #[test]
    fn test_explicit_dialect_always_has_header() {
        let table = format_table("1,2\n3,4", TabularDialect::Excel).unwrap();
        assert_eq!(table, "| 1 | 2 |\n| --- | --- |\n| 3 | 4 |");
    }

    #[test]
    fn test_sniffed_numeric_first_row_is_not_header() {
        let table = format_table("1,2\n3,4", TabularDialect::Sniff).unwrap();
        assert_eq!(table, "| 1 | 2 |\n| 3 | 4 |");
    }

    #[test]
    fn test_excel_tab_dialect() {
        let table = format_table("a\tb\nc\td", TabularDialect::ExcelTab).unwrap();
        assert_eq!(table, "| a | b |\n| --- | --- |\n| c | d |");
    }

    #[test]
    fn test_sniffs_semicolons() {
        let table = format_table("name;qty\napple;3\npear;12\n", TabularDialect::Sniff).unwrap();
        assert_eq!(
            table,
            "| name | qty |\n| --- | --- |\n| apple | 3 |\n| pear | 12 |"
        );
    }

    #[test]
    fn test_pipes_are_substituted() {
        let table = format_table("a,b\n\"x|y\",z", TabularDialect::Excel).unwrap();
        assert!(table.contains("| x\u{2758}y | z |"));
        assert_eq!(table.matches('|').count(), 9);
    }

    #[test]
    fn test_embedded_newlines_are_flattened() {
        let table = format_table("a,b\n\"one\ntwo\",\"three\r\nfour\"", TabularDialect::Excel)
            .unwrap();
        assert_eq!(
            table,
            "| a | b |\n| --- | --- |\n| one two | three four |"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let table = format_table("\n\nabc,def\nfoo,bar\n\n", TabularDialect::Excel).unwrap();
        assert_eq!(table, SIMPLE_TABLE);
    }

    #[test]
    fn test_single_row_has_no_separator() {
        assert_eq!(markdown_table(&[vec!["a".to_string()]], true), "| a |");
    }

    #[test]
    fn test_ragged_rows_keep_header_width_separator() {
        let table = format_table("a,b,c\n1,2\n3,4,5,6", TabularDialect::Excel).unwrap();
        assert_eq!(
            table,
            "| a | b | c |\n| --- | --- | --- |\n| 1 | 2 |\n| 3 | 4 | 5 | 6 |"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let table = format_table(SIMPLE, TabularDialect::Excel).unwrap();
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_sniff_failure_is_detection_error() {
        let err = format_table("justoneword", TabularDialect::Sniff).unwrap_err();
        assert!(matches!(err, Error::Detection(_)));
    }

    #[test]
    fn test_dialect_names() {
        assert_eq!(TabularDialect::ExcelTab.to_string(), "excel-tab");
        assert_eq!(TabularDialect::Sniff.named(), None);
        assert_eq!(TabularDialect::Unix.named(), Some(Dialect::UNIX));
    }
}
