//! Tournament text format.
//!
//! ```text
//! 3            <- competitor count
//! 1,Alpha      <- `index,name`, 1-based, one line per competitor
//! 2,Beta
//! 3,Gamma
//! ---          <- separator, contents ignored
//! 5,1,2        <- `weight,winner,loser`, 1-based indices
//! 5,2,3
//! 10,3,1
//! ```

use std::path::Path;
use std::str::FromStr;

use super::matrix::WeightMatrix;
use crate::error::{KemenyError, Result};

/// Competitor names together with their weight matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tournament {
    /// Display names, indexed like the matrix rows.
    pub names: Vec<String>,
    /// Pairwise weights.
    pub weights: WeightMatrix,
}

impl Tournament {
    /// Number of competitors.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromStr for Tournament {
    type Err = KemenyError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tournament(s)
    }
}

/// Reads and parses a tournament file.
pub fn load_tournament(path: impl AsRef<Path>) -> Result<Tournament> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| KemenyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tournament = parse_tournament(&text)?;
    tracing::debug!(
        path = %path.display(),
        competitors = tournament.len(),
        "loaded tournament"
    );
    Ok(tournament)
}

/// Parses tournament text. Line numbers in errors are 1-based.
pub fn parse_tournament(text: &str) -> Result<Tournament> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (line_no, count_line) = lines
        .next()
        .ok_or_else(|| KemenyError::parse(1, "missing competitor count"))?;
    let n: usize = count_line
        .parse()
        .map_err(|_| KemenyError::parse(line_no, format!("invalid competitor count `{count_line}`")))?;

    let mut names = Vec::with_capacity(n);
    for expected in 1..=n {
        let (line_no, line) = lines.next().ok_or_else(|| {
            KemenyError::parse(line_no + expected, format!("missing name for competitor {expected}"))
        })?;
        let (index, name) = line
            .split_once(',')
            .ok_or_else(|| KemenyError::parse(line_no, "expected `index,name`"))?;
        let index = parse_field::<usize>(index, line_no, "competitor index")?;
        if index != expected {
            return Err(KemenyError::parse(
                line_no,
                format!("expected competitor index {expected}, got {index}"),
            ));
        }
        names.push(name.trim().to_string());
    }

    // Separator line.
    lines.next();

    let mut weights = WeightMatrix::zeros(n);
    for (line_no, line) in lines {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let (Some(w), Some(winner), Some(loser), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(KemenyError::parse(line_no, "expected `weight,winner,loser`"));
        };
        let w = parse_field::<u64>(w, line_no, "weight")?;
        let winner = parse_index(winner, n, line_no)?;
        let loser = parse_index(loser, n, line_no)?;
        if winner == loser {
            return Err(KemenyError::parse(
                line_no,
                format!("competitor {} cannot play itself", winner + 1),
            ));
        }
        weights
            .set(winner, loser, w)
            .map_err(|err| KemenyError::parse(line_no, err.to_string()))?;
    }

    Ok(Tournament { names, weights })
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| KemenyError::parse(line, format!("invalid {what} `{field}`")))
}

/// Converts a 1-based index field to a 0-based index.
fn parse_index(field: &str, n: usize, line: usize) -> Result<usize> {
    let index = parse_field::<usize>(field, line, "competitor index")?;
    if index == 0 || index > n {
        return Err(KemenyError::parse(
            line,
            format!("competitor index {index} out of range 1..={n}"),
        ));
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLE: &str = "3\n1,Alpha\n2,Beta\n3,Gamma\n\n5,1,2\n5,2,3\n10,3,1\n";

    #[test]
    fn test_parse_cycle() {
        let t = parse_tournament(CYCLE).unwrap();
        assert_eq!(t.names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(t.weights.weight(0, 1), 5);
        assert_eq!(t.weights.weight(1, 2), 5);
        assert_eq!(t.weights.weight(2, 0), 10);
        assert_eq!(t.weights.weight(1, 0), 0);
    }

    #[test]
    fn test_from_str() {
        let t: Tournament = CYCLE.parse().unwrap();
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_name_with_spaces_and_trailing_blank_lines() {
        let t = parse_tournament("2\n1, Red Team \n2,Blue\n--\n3,1,2\n\n\n").unwrap();
        assert_eq!(t.names, vec!["Red Team", "Blue"]);
        assert_eq!(t.weights.weight(0, 1), 3);
    }

    #[test]
    fn test_no_weight_section() {
        let t = parse_tournament("2\n1,A\n2,B\n").unwrap();
        assert_eq!(t.weights.total_weight(), 0);
    }

    #[test]
    fn test_empty_input() {
        let err = parse_tournament("").unwrap_err();
        assert!(matches!(err, KemenyError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_bad_count() {
        let err = parse_tournament("three\n").unwrap_err();
        assert!(matches!(err, KemenyError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_missing_name() {
        let err = parse_tournament("3\n1,A\n2,B\n").unwrap_err();
        assert!(matches!(err, KemenyError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_out_of_order_index() {
        let err = parse_tournament("2\n2,A\n1,B\n").unwrap_err();
        assert!(matches!(err, KemenyError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_index_out_of_range() {
        let err = parse_tournament("2\n1,A\n2,B\n\n4,1,3\n").unwrap_err();
        assert!(matches!(err, KemenyError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_self_match_rejected() {
        let err = parse_tournament("2\n1,A\n2,B\n\n4,2,2\n").unwrap_err();
        assert!(err.to_string().contains("itself"));
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(parse_tournament("2\n1,A\n2,B\n\n4,1\n").is_err());
        assert!(parse_tournament("2\n1,A\n2,B\n\n4,1,2,9\n").is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = parse_tournament("2\n1,A\n2,B\n\n-4,1,2\n").unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_weights_summing_past_u64_rejected() {
        let text = format!("3\n1,A\n2,B\n3,C\n\n{max},2,1\n{max},3,1\n1,3,2\n", max = u64::MAX);
        let err = parse_tournament(&text).unwrap_err();
        assert!(
            matches!(err, KemenyError::Parse { line: 7, ref reason } if reason.contains("total weight")),
            "{err}"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tournament("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, KemenyError::Io { .. }));
    }
}
