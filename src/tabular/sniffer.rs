//! Dialect and header inference for delimited text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use crate::error::{Error, Result};

/// Candidate delimiters in order of preference.
const DELIMITERS: &[u8] = b",\t;| :";

/// Share of sample lines that must agree on a delimiter count.
const CONSISTENCY_THRESHOLD: f64 = 0.9;

const SAMPLE_LINES: usize = 64;
const HEADER_SAMPLE_ROWS: usize = 20;

// A quote character opening a field: at line start or after a delimiter.
static FIELD_QUOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)(?:^|[,\t;|: ]) ?(["'])"#).expect("field quote pattern")
});

/// Infer the dialect of `sample`.
///
/// # Errors
///
/// Returns a detection error when the sample is empty or no candidate
/// delimiter occurs the same number of times on enough lines.
pub fn sniff(sample: &str) -> Result<Dialect> {
    let lines = sample
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .take(SAMPLE_LINES)
        .collect::<Vec<_>>();
    if lines.is_empty() {
        return Err(Error::detection("no data to sample"));
    }

    let quote = guess_quote(sample);
    let delimiter = DELIMITERS
        .iter()
        .copied()
        .find(|&delim| is_consistent(&lines, delim, quote))
        .ok_or_else(|| Error::detection("no delimiter occurs consistently across the sample"))?;

    Ok(Dialect {
        delimiter,
        quote,
        skip_initial_space: delimiter != b' ' && always_followed_by_space(&lines, delimiter, quote),
    })
}

/// Guess whether the first row of `sample` is a header.
///
/// Each column whose data cells are all numeric casts a vote: for a header
/// if the first-row cell is not numeric, against if it is. Without any
/// evidence against it the first row is taken as a header.
///
/// # Errors
///
/// Returns a CSV error if the sample cannot be read with `dialect`.
pub fn has_header(sample: &str, dialect: &Dialect) -> Result<bool> {
    let rows = dialect.read_records(sample)?;
    let Some((header, data)) = rows.split_first() else {
        return Ok(true);
    };
    let data = &data[..data.len().min(HEADER_SAMPLE_ROWS)];

    let mut votes = 0i32;
    for (column, title) in header.iter().enumerate() {
        let cells = data
            .iter()
            .filter_map(|row| row.get(column))
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .collect::<Vec<_>>();
        if cells.is_empty() || !cells.iter().all(|cell| is_numeric(cell)) {
            continue;
        }
        if is_numeric(title.trim()) {
            votes -= 1;
        } else {
            votes += 1;
        }
    }
    Ok(votes >= 0)
}

fn guess_quote(sample: &str) -> u8 {
    let (mut double, mut single) = (0usize, 0usize);
    for caps in FIELD_QUOTE.captures_iter(sample) {
        match caps.get(1).map(|m| m.as_str()) {
            Some("\"") => double += 1,
            Some("'") => single += 1,
            _ => {}
        }
    }
    if single > double { b'\'' } else { b'"' }
}

/// Occurrences of `delim` outside quoted regions.
fn count_unquoted(line: &str, delim: u8, quote: u8) -> usize {
    let mut in_quote = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == quote {
            in_quote = !in_quote;
        } else if byte == delim && !in_quote {
            count += 1;
        }
    }
    count
}

fn is_consistent(lines: &[&str], delim: u8, quote: u8) -> bool {
    let counts = lines
        .iter()
        .map(|line| count_unquoted(line, delim, quote))
        .collect::<Vec<_>>();
    let Some(modal) = mode(&counts) else {
        return false;
    };
    if modal == 0 {
        return false;
    }
    let agreeing = counts.iter().filter(|&&count| count == modal).count();
    #[allow(clippy::cast_precision_loss)]
    let consistency = agreeing as f64 / counts.len() as f64;
    consistency >= CONSISTENCY_THRESHOLD
}

/// Most frequent value; ties go to the larger value.
fn mode(values: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for &value in values {
        let freq = values.iter().filter(|&&v| v == value).count();
        match best {
            Some((best_value, best_freq))
                if best_freq > freq || (best_freq == freq && best_value >= value) => {}
            _ => best = Some((value, freq)),
        }
    }
    best.map(|(value, _)| value)
}

fn always_followed_by_space(lines: &[&str], delim: u8, quote: u8) -> bool {
    let mut seen = false;
    for line in lines {
        let bytes = line.as_bytes();
        let mut in_quote = false;
        for (i, &byte) in bytes.iter().enumerate() {
            if byte == quote {
                in_quote = !in_quote;
            } else if byte == delim && !in_quote {
                if bytes.get(i + 1) != Some(&b' ') {
                    return false;
                }
                seen = true;
            }
        }
    }
    seen
}

fn is_numeric(cell: &str) -> bool {
    cell.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_comma() {
        let dialect = sniff("abc,def\nfoo,bar").unwrap();
        assert_eq!(dialect.delimiter, b',');
        assert_eq!(dialect.quote, b'"');
        assert!(!dialect.skip_initial_space);
    }

    #[test]
    fn test_sniff_tab() {
        assert_eq!(sniff("a\tb\tc\n1\t2\t3").unwrap().delimiter, b'\t');
    }

    #[test]
    fn test_sniff_ignores_delimiters_inside_quotes() {
        let sample = "name;note\n\"Doe, John\";ok\n\"Roe, Jane\";late";
        assert_eq!(sniff(sample).unwrap().delimiter, b';');
    }

    #[test]
    fn test_sniff_single_quotes() {
        let sample = "'a b','c'\n'd','e f'";
        let dialect = sniff(sample).unwrap();
        assert_eq!(dialect.quote, b'\'');
        assert_eq!(dialect.delimiter, b',');
    }

    #[test]
    fn test_sniff_space_after_delimiter() {
        let dialect = sniff("a, b, c\n1, 2, 3").unwrap();
        assert_eq!(dialect.delimiter, b',');
        assert!(dialect.skip_initial_space);
    }

    #[test]
    fn test_sniff_inconsistent_sample_fails() {
        let sample = "a,b\nc,d,e,f\ng\nh,i,j";
        assert!(matches!(sniff(sample), Err(Error::Detection(_))));
    }

    #[test]
    fn test_sniff_empty_sample_fails() {
        assert!(matches!(sniff(""), Err(Error::Detection(_))));
        assert!(matches!(sniff("\n\n"), Err(Error::Detection(_))));
    }

    #[test]
    fn test_has_header_text_over_numbers() {
        let sample = "name,age\nbob,31\nalice,29";
        assert!(has_header(sample, &Dialect::EXCEL).unwrap());
    }

    #[test]
    fn test_has_header_numbers_only() {
        assert!(!has_header("1,2\n3,4\n5,6", &Dialect::EXCEL).unwrap());
    }

    #[test]
    fn test_has_header_without_evidence_defaults_to_true() {
        assert!(has_header("abc,def\nfoo,bar", &Dialect::EXCEL).unwrap());
        assert!(has_header("only,row", &Dialect::EXCEL).unwrap());
    }

    #[test]
    fn test_mode_prefers_most_frequent() {
        assert_eq!(mode(&[1, 2, 2, 3]), Some(2));
        assert_eq!(mode(&[1, 3]), Some(3));
        assert_eq!(mode(&[]), None);
    }
}
