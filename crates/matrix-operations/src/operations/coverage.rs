use std::path::Path;

use tracing::debug;

use crate::{OperationError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageFormat {
    /// LCOV tracefile, as written by `cargo llvm-cov --lcov`.
    Lcov,
    /// Text output of `go tool cover -func`.
    GoFunc,
}

/// Line totals summed over every `LF:`/`LH:` record of an LCOV tracefile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LcovTotals {
    pub lines_found: u64,
    pub lines_hit: u64,
}

impl LcovTotals {
    /// # Errors
    ///
    /// Returns [`OperationError::CoverageParse`] if an `LF:` or `LH:` record is not
    /// a number or the running total overflows.
    pub fn parse(content: &str) -> Result<Self> {
        let mut totals = Self::default();

        for (index, line) in content.lines().enumerate() {
            let (target, value) = if let Some(value) = line.strip_prefix("LF:") {
                (&mut totals.lines_found, value)
            } else if let Some(value) = line.strip_prefix("LH:") {
                (&mut totals.lines_hit, value)
            } else {
                continue;
            };

            let malformed = || OperationError::CoverageParse {
                line_number: index + 1,
                line: line.to_string(),
            };
            let count: u64 = value.trim().parse().map_err(|_| malformed())?;
            *target = target.checked_add(count).ok_or_else(malformed)?;
        }

        Ok(totals)
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.lines_found == 0 {
            return 0.0;
        }
        (self.lines_hit as f64 * 100.0) / self.lines_found as f64
    }
}

/// Extracts the percentage from the `total:` line of `go tool cover -func` output.
///
/// # Errors
///
/// Returns [`OperationError::CoverageTotalMissing`] when no `total:` line exists.
pub fn parse_go_total(output: &str) -> Result<f64> {
    let (index, line) = output
        .lines()
        .enumerate()
        .find(|(_, line)| line.starts_with("total:"))
        .ok_or(OperationError::CoverageTotalMissing)?;

    line.split_whitespace()
        .last()
        .map(|token| token.trim_end_matches('%'))
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| OperationError::CoverageParse {
            line_number: index + 1,
            line: line.to_string(),
        })
}

/// # Errors
///
/// Returns an error if the report cannot be read or parsed.
pub fn read_coverage(path: &Path, format: CoverageFormat) -> Result<f64> {
    let content = std::fs::read_to_string(path).map_err(|source| OperationError::CoverageRead {
        path: path.to_path_buf(),
        source,
    })?;

    let percent = match format {
        CoverageFormat::Lcov => LcovTotals::parse(&content)?.percent(),
        CoverageFormat::GoFunc => parse_go_total(&content)?,
    };

    debug!(path = %path.display(), percent, "read coverage report");
    Ok(percent)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageCheck {
    pub percent: f64,
    pub threshold: f64,
}

impl CoverageCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.percent >= self.threshold
    }

    /// # Errors
    ///
    /// Returns [`OperationError::CoverageBelowThreshold`] if the check did not pass.
    pub fn enforce(&self) -> Result<()> {
        if self.passed() {
            Ok(())
        } else {
            Err(OperationError::CoverageBelowThreshold {
                percent: self.percent,
                threshold: self.threshold,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LCOV: &str = "\
SF:src/lib.rs
DA:1,1
LF:10
LH:8
end_of_record
SF:src/main.rs
LF:10
LH:2
end_of_record
";

    #[test]
    fn lcov_totals_sum_every_record() {
        let totals = LcovTotals::parse(LCOV).expect("lcov should parse");

        assert_eq!(
            totals,
            LcovTotals {
                lines_found: 20,
                lines_hit: 10
            }
        );
        assert!((totals.percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lcov_without_records_is_zero_percent() {
        let totals = LcovTotals::parse("SF:src/lib.rs\nend_of_record\n").expect("lcov should parse");

        assert!(totals.percent().abs() < f64::EPSILON);
    }

    #[test]
    fn lcov_eighty_percent() {
        let totals = LcovTotals::parse("LF:10\nLH:8\n").expect("lcov should parse");

        assert_eq!(format!("{:.2}", totals.percent()), "80.00");
    }

    #[test]
    fn lcov_rejects_non_numeric_counts() {
        let result = LcovTotals::parse("LF:10\nLH:eight\n");

        assert!(matches!(
            result,
            Err(OperationError::CoverageParse { line_number: 2, .. })
        ));
    }

    #[test]
    fn lcov_totals_overflowing_u64_are_rejected() {
        let result = LcovTotals::parse("LF:18446744073709551615\nLF:1\nLH:1\n");

        assert!(matches!(
            result,
            Err(OperationError::CoverageParse { line_number: 2, .. })
        ));
    }

    #[test]
    fn go_total_line_is_parsed() {
        let output = "\
example.com/pkg/a.go:10:\tFoo\t100.0%
total:\t\t\t\t(statements)\t85.3%
";

        let percent = parse_go_total(output).expect("go output should parse");

        assert!((percent - 85.3).abs() < 1e-9);
    }

    #[test]
    fn go_output_without_total_is_an_error() {
        let result = parse_go_total("example.com/pkg/a.go:10:\tFoo\t100.0%\n");

        assert!(matches!(result, Err(OperationError::CoverageTotalMissing)));
    }

    #[test]
    fn read_coverage_from_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("lcov.info");
        fs::write(&path, LCOV)?;

        let percent = read_coverage(&path, CoverageFormat::Lcov)?;

        assert!((percent - 50.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn read_coverage_missing_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        let result = read_coverage(&dir.path().join("missing.info"), CoverageFormat::Lcov);

        assert!(matches!(result, Err(OperationError::CoverageRead { .. })));
        Ok(())
    }

    #[test]
    fn check_passes_at_threshold() {
        let check = CoverageCheck {
            percent: 80.0,
            threshold: 80.0,
        };

        assert!(check.passed());
        assert!(check.enforce().is_ok());
    }

    #[test]
    fn check_fails_below_threshold() {
        let check = CoverageCheck {
            percent: 79.99,
            threshold: 80.0,
        };

        assert!(matches!(
            check.enforce(),
            Err(OperationError::CoverageBelowThreshold { .. })
        ));
    }
}
