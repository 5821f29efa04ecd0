use crate::db::core::PointStore;
use crate::geom::point::Point;
use anyhow::{Context, Result};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointParseError {
    #[error("line {line}: expected '<x>,<y>', got '{text}'")]
    WrongFormat { line: usize, text: String },
    #[error("line {line}: '{text}' is not an integer coordinate")]
    NotANumber {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

fn parse_coord(text: &str, line: usize) -> Result<i64, PointParseError> {
    let text = text.trim();
    text.parse().map_err(|source| PointParseError::NotANumber {
        line,
        text: text.to_string(),
        source,
    })
}

/// Parses one `x,y` line. `line` is 1-based and only used for error reporting.
pub fn parse_line(text: &str, line: usize) -> Result<Point<i64>, PointParseError> {
    let wrong_format = || PointParseError::WrongFormat {
        line,
        text: text.to_string(),
    };
    let (x, y) = text.split_once(',').ok_or_else(wrong_format)?;
    if y.contains(',') {
        return Err(wrong_format());
    }
    Ok(Point::new(parse_coord(x, line)?, parse_coord(y, line)?))
}

/// Parses the whole point list. Blank lines, including the trailing one, are skipped.
pub fn parse_str(contents: &str) -> Result<PointStore, PointParseError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line.trim(), i + 1))
        .collect()
}

pub fn parse(filename: &str) -> Result<PointStore> {
    let contents = std::fs::read_to_string(filename)
        .context(format!("Failed to open point file: {}", filename))?;
    let store = parse_str(&contents).context(format!("Invalid point list in '{}'", filename))?;
    log::debug!("Parsed {} points from {}", store.len(), filename);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_and_skips_trailing_blank() {
        let store = parse_str("7,1\n11,1\n11,7\n").unwrap();
        assert_eq!(
            store.points(),
            &[Point::new(7, 1), Point::new(11, 1), Point::new(11, 7)]
        );
    }

    #[test]
    fn accepts_negative_and_crlf() {
        let store = parse_str("-3,4\r\n5,-6\r\n").unwrap();
        assert_eq!(store.points(), &[Point::new(-3, 4), Point::new(5, -6)]);
    }

    #[test]
    fn empty_input_is_an_empty_store() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("\n").unwrap().is_empty());
    }

    #[test]
    fn reports_line_of_bad_token() {
        match parse_str("1,2\n3,x\n") {
            Err(PointParseError::NotANumber { line, text, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert!(matches!(
            parse_str("1,2,3"),
            Err(PointParseError::WrongFormat { line: 1, .. })
        ));
        assert!(matches!(
            parse_str("1,2\n\n42"),
            Err(PointParseError::WrongFormat { line: 3, .. })
        ));
    }
}
