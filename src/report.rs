//! Human-readable ranking output.

use std::fmt;

/// Formats a ranking as a numbered list of names followed by its score.
///
/// ```text
/// Ranking:
///  1 Gamma
///  2 Alpha
///  3 Beta
///
/// Score: 5
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RankingReport<'a> {
    names: &'a [String],
    ranking: &'a [usize],
    score: u64,
}

impl<'a> RankingReport<'a> {
    /// `ranking` holds indices into `names`, best first.
    pub fn new(names: &'a [String], ranking: &'a [usize], score: u64) -> Self {
        Self {
            names,
            ranking,
            score,
        }
    }
}

impl fmt::Display for RankingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ranking:")?;
        for (rank, &index) in self.ranking.iter().enumerate() {
            let name = self.names.get(index).map_or("?", String::as_str);
            writeln!(f, "{:2} {}", rank + 1, name)?;
        }
        write!(f, "\nScore: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let names = vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()];
        let report = RankingReport::new(&names, &[2, 0, 1], 5);
        assert_eq!(
            report.to_string(),
            "Ranking:\n 1 Gamma\n 2 Alpha\n 3 Beta\n\nScore: 5"
        );
    }

    #[test]
    fn test_report_two_digit_ranks() {
        let names: Vec<String> = (0..10).map(|i| format!("P{i}")).collect();
        let ranking: Vec<usize> = (0..10).rev().collect();
        let text = RankingReport::new(&names, &ranking, 0).to_string();
        assert!(text.contains("\n 9 P1\n10 P0\n"));
    }
}
