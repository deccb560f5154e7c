//! Reads adjacency matrices from whitespace separated text.
//!
//! Tokens are parsed leniently: a token contributes the integer at its start
//! (`"7,"` reads as 7) and tokens without one are skipped. Values fill the
//! matrix row by row; anything past node_count^2 values is ignored.

use std::{
    io::{BufRead, Cursor},
    path::Path,
};

use super::{AdjacencyMatrix, Cost, slot_count};
use crate::errors::{Error, Result};


/// Parse the integer at the start of `token`
/// Optional sign followed by at least one digit; the rest of the token is ignored.
/// Returns None when there is no leading integer or it does not fit an i32
pub fn parse_leading_int(token: &str) -> Option<i32> {
    let bytes = token.as_bytes();
    let sign_len = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return None;
    }
    token[..sign_len + digit_len].parse().ok()
}

/// Every numeric value in the reader, in order
/// Bytes that are not UTF-8 are decoded lossily, same as `read_source`
pub(crate) fn numeric_values<R: BufRead>(mut reader: R) -> std::io::Result<Vec<i64>> {
    let mut values = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        for token in line.split_whitespace() {
            match parse_leading_int(token) {
                Some(value) => values.push(i64::from(value)),
                None => tracing::trace!(token, "skipping non-numeric token"),
            }
        }
    }
    Ok(values)
}

/// Read a whole input file, mapping any failure to `SourceUnavailable`
pub(crate) fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}


/// Parse a `node_count` x `node_count` matrix from a reader
pub fn parse_matrix_reader<R: BufRead>(reader: R, node_count: usize) -> Result<AdjacencyMatrix> {
    let expected = slot_count(node_count)?;
    let values = numeric_values(reader)?;

    if values.len() < expected {
        return Err(Error::InsufficientData {
            expected,
            found: values.len(),
        });
    }
    if values.len() > expected {
        tracing::warn!(
            expected,
            found = values.len(),
            "ignoring numbers past the end of the matrix"
        );
    }

    let mut weights: Vec<Cost> = Vec::with_capacity(expected);
    for (k, &value) in values[..expected].iter().enumerate() {
        if value < 0 {
            return Err(Error::NegativeWeight {
                row: k / node_count,
                col: k % node_count,
                value,
            });
        }
        weights.push(value as Cost);
    }

    let matrix = AdjacencyMatrix::from_weights(node_count, &weights)?;
    tracing::debug!(node_count, edges = matrix.edge_count(), "parsed adjacency matrix");
    Ok(matrix)
}

/// Parse a matrix from in-memory text, handy for tests
pub fn parse_matrix_str(data: &str, node_count: usize) -> Result<AdjacencyMatrix> {
    parse_matrix_reader(Cursor::new(data), node_count)
}

/// Load a matrix from a file on disk
pub fn load_matrix(path: &Path, node_count: usize) -> Result<AdjacencyMatrix> {
    let data = read_source(path)?;
    let matrix = parse_matrix_str(&data, node_count)?;
    tracing::info!(path = %path.display(), node_count, "loaded adjacency matrix");
    Ok(matrix)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("7,"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999"), None);
    }

    #[test]
    fn test_parse_row_major() {
        let matrix = parse_matrix_str("0 1\n2 0", 2).unwrap();
        assert_eq!(matrix.edge(0, 1), Some(1));
        assert_eq!(matrix.edge(1, 0), Some(2));
        assert_eq!(matrix.edge(0, 0), None);
    }

    #[test]
    fn test_layout_is_irrelevant() {
        // Line breaks do not need to match rows
        let matrix = parse_matrix_str("0 1 2\n0\n 3 0   0 0\t0", 3).unwrap();
        assert_eq!(matrix.edge(0, 1), Some(1));
        assert_eq!(matrix.edge(0, 2), Some(2));
        assert_eq!(matrix.edge(1, 1), Some(3));
    }

    #[test]
    fn test_non_numeric_tokens_are_skipped() {
        let data = "matrix:\n0 x 5\nfoo 6 0 end";
        let matrix = parse_matrix_str(data, 2).unwrap();
        assert_eq!(matrix.edge(0, 1), Some(5));
        assert_eq!(matrix.edge(1, 0), Some(6));
    }

    #[test]
    fn test_excess_values_are_ignored() {
        let matrix = parse_matrix_str("0 1 1 0 9 9 9", 2).unwrap();
        assert_eq!(matrix, parse_matrix_str("0 1 1 0", 2).unwrap());
    }

    #[test]
    fn test_insufficient_data() {
        let result = parse_matrix_str("0 1 1", 2);
        assert!(matches!(result, Err(Error::InsufficientData { expected: 4, found: 3 })));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = parse_matrix_str("0 1 -4 0", 2);
        assert!(matches!(result, Err(Error::NegativeWeight { row: 1, col: 0, value: -4 })));
    }

    #[test]
    fn test_zero_node_count_rejected() {
        assert!(matches!(parse_matrix_str("1 2 3", 0), Err(Error::InvalidNodeCount)));
    }

    #[test]
    fn test_huge_node_count_is_an_error() {
        assert!(matches!(
            parse_matrix_str("0 1 1 0", usize::MAX / 2),
            Err(Error::NodeCountTooLarge { .. })
        ));
        assert!(matches!(
            parse_matrix_str("0 1 1 0", 1usize << (usize::BITS / 2)),
            Err(Error::NodeCountTooLarge { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_matches_file_loading() {
        let bytes: &[u8] = b"0 1\xff\n\xfe 2 0";
        let from_reader = parse_matrix_reader(bytes, 2).unwrap();
        assert_eq!(from_reader.edge(0, 1), Some(1));
        assert_eq!(from_reader.edge(1, 0), Some(2));

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, bytes).unwrap();
        assert_eq!(load_matrix(&path, 2).unwrap(), from_reader);
    }

    #[test]
    fn test_missing_file() {
        let result = load_matrix(Path::new("/definitely/not/here/adjacency.txt"), 4);
        assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
    }
}
