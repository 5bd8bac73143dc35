//! Girdin-version CSVV body parsing.
//!
//! The body is a sequence of keyword-introduced blocks: a keyword on its
//! own row, followed by data rows belonging to it. Girdin files match
//! predictor and covariate names one-for-one against the flat coefficient
//! vector.

use crate::error::{CsvvError, CsvvResult};

/// Recognized block keywords, in file order.
const KEYWORDS: [&str; 6] = [
    "observations",
    "prednames",
    "covarnames",
    "gamma",
    "gammavcv",
    "residvcv",
];

/// Parsed girdin body content.
#[derive(Debug, Clone, PartialEq)]
pub struct GirdinBody {
    pub observations: f64,
    pub prednames: Vec<String>,
    pub covarnames: Vec<String>,
    /// Flat coefficient vector, predictor-major.
    pub gamma: Vec<f64>,
    /// Coefficient covariance matrix, row-oriented.
    pub gammavcv: Vec<Vec<f64>>,
    /// Residual covariance matrix, row-oriented.
    pub residvcv: Vec<Vec<f64>>,
}

/// Split a data row into cells: comma first, then tab, then whitespace.
fn split_row(row: &str) -> Vec<String> {
    let cells: Vec<String> = row.split(',').map(|c| c.trim().to_string()).collect();
    if cells.len() > 1 {
        return cells;
    }
    let cells: Vec<String> = row.split('\t').map(|c| c.trim().to_string()).collect();
    if cells.len() > 1 {
        return cells;
    }
    row.split_whitespace().map(|c| c.to_string()).collect()
}

fn parse_floats(block: &str, cells: &[String]) -> CsvvResult<Vec<f64>> {
    cells
        .iter()
        .map(|c| {
            c.parse::<f64>().map_err(|_| CsvvError::BadNumber {
                block: block.to_string(),
                value: c.clone(),
            })
        })
        .collect()
}

/// Parse body lines (everything after the header).
pub fn read_girdin(lines: &[&str]) -> CsvvResult<GirdinBody> {
    let mut blocks: Vec<(String, Vec<Vec<String>>)> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if KEYWORDS.contains(&trimmed) {
            blocks.push((trimmed.to_string(), Vec::new()));
        } else {
            let block = blocks
                .last_mut()
                .ok_or_else(|| CsvvError::RowBeforeKeyword(trimmed.to_string()))?;
            block.1.push(split_row(trimmed));
        }
    }

    let take = |name: &str| -> CsvvResult<Vec<Vec<String>>> {
        blocks
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| CsvvError::MissingBlock(name.to_string()))
    };

    let first_row = |name: &str| -> CsvvResult<Vec<String>> {
        take(name)?
            .into_iter()
            .next()
            .ok_or_else(|| CsvvError::MissingBlock(name.to_string()))
    };

    let observations_row = first_row("observations")?;
    let observations = parse_floats("observations", &observations_row)?[0];

    let prednames = first_row("prednames")?;
    let covarnames = first_row("covarnames")?;
    let gamma = parse_floats("gamma", &first_row("gamma")?)?;

    let matrix = |name: &str| -> CsvvResult<Vec<Vec<f64>>> {
        let rows = take(name)?
            .iter()
            .map(|row| parse_floats(name, row))
            .collect::<CsvvResult<Vec<_>>>()?;
        if let Some(width) = rows.first().map(Vec::len) {
            if let Some(bad) = rows.iter().find(|r| r.len() != width) {
                return Err(CsvvError::RaggedBlock {
                    block: name.to_string(),
                    detail: format!("expected {} columns, found {}", width, bad.len()),
                });
            }
        }
        Ok(rows)
    };

    Ok(GirdinBody {
        observations,
        prednames,
        covarnames,
        gamma,
        gammavcv: matrix("gammavcv")?,
        residvcv: matrix("residvcv")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
observations
100

prednames
tas, tas2, tas3

covarnames
1\tclimtas\tloggdppc

gamma
0.1 0.2 0.3

gammavcv
1.0, 0.1, 0.0
0.1, 1.0, 0.1
0.0, 0.1, 1.0

residvcv
0.5
";

    #[test]
    fn test_read_girdin() {
        let lines: Vec<&str> = BODY.lines().collect();
        let body = read_girdin(&lines).unwrap();
        assert_eq!(body.observations, 100.0);
        assert_eq!(body.prednames, vec!["tas", "tas2", "tas3"]);
        assert_eq!(body.covarnames, vec!["1", "climtas", "loggdppc"]);
        assert_eq!(body.gamma, vec![0.1, 0.2, 0.3]);
        assert_eq!(body.gammavcv.len(), 3);
        assert_eq!(body.gammavcv[1][0], 0.1);
        assert_eq!(body.residvcv, vec![vec![0.5]]);
    }

    #[test]
    fn test_row_before_keyword() {
        let lines = vec!["1.0, 2.0"];
        assert!(matches!(
            read_girdin(&lines),
            Err(CsvvError::RowBeforeKeyword(_))
        ));
    }

    #[test]
    fn test_missing_block() {
        let lines = vec!["observations", "100"];
        assert!(matches!(
            read_girdin(&lines),
            Err(CsvvError::MissingBlock(_))
        ));
    }

    #[test]
    fn test_ragged_matrix() {
        let lines = vec![
            "observations",
            "1",
            "prednames",
            "a",
            "covarnames",
            "b",
            "gamma",
            "0.5",
            "gammavcv",
            "1.0, 0.0",
            "1.0",
            "residvcv",
            "0.5",
        ];
        assert!(matches!(
            read_girdin(&lines),
            Err(CsvvError::RaggedBlock { .. })
        ));
    }
}
