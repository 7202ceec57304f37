use derive_more::{AsRef, Deref};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ordered category values. Order decides angular placement and color.
///
/// Entries that are negative or not finite are stored as `0.0`, so they take a
/// color slot but never an angular share.
#[derive(Debug, Clone, PartialEq, Default, Deref, AsRef)]
pub struct CategorySeries(Vec<f64>);

impl CategorySeries {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        for (index, value) in values.iter_mut().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                log::debug!("Category {} has unusable value {}, treating as 0", index, value);
                *value = 0.0;
            }
        }
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn non_zero_count(&self) -> usize {
        self.0.iter().filter(|&&v| v != 0.0).count()
    }

    pub fn all_non_zero(&self) -> bool {
        !self.0.is_empty() && self.non_zero_count() == self.0.len()
    }

    /// Share of categories that are non-empty, as a percentage. This counts
    /// categories, it does not weigh them by value.
    pub fn percent(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        100.0 * self.non_zero_count() as f64 / self.0.len() as f64
    }
}

impl From<Vec<f64>> for CategorySeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for CategorySeries {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for CategorySeries {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl fmt::Display for CategorySeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid category value '{token}'")]
pub struct SeriesParseError {
    pub token: String,
}

impl FromStr for CategorySeries {
    type Err = SeriesParseError;

    /// Parses values separated by commas and/or whitespace, e.g. `"1, 0 2.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| SeriesParseError {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitizes_unusable_values() {
        let series = CategorySeries::new(vec![1.0, -3.0, f64::NAN, f64::INFINITY, 2.0]);

        assert_eq!(series.values(), &[1.0, 0.0, 0.0, 0.0, 2.0]);
        assert_eq!(series.sum(), 3.0);
        assert_eq!(series.non_zero_count(), 2);
    }

    #[test]
    fn test_percent_counts_categories() {
        assert_eq!(CategorySeries::from([1.0, 1.0, 1.0, 1.0]).percent(), 100.0);
        assert_eq!(CategorySeries::from([1000.0, 0.0, 0.001, 0.0]).percent(), 50.0);
        assert!((CategorySeries::from([1.0, 0.0, 1.0]).percent() - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(CategorySeries::default().percent(), 0.0);
    }

    #[test]
    fn test_all_non_zero_holds_for_thirds() {
        let series = CategorySeries::from([2.0, 2.0, 2.0]);

        assert!(series.all_non_zero());
        assert!(!CategorySeries::default().all_non_zero());
        assert!(!CategorySeries::from([2.0, 0.0]).all_non_zero());
    }

    #[test]
    fn test_parse_mixed_separators() {
        let series: CategorySeries = "1, 0 ,2.5\t4".parse().unwrap();
        assert_eq!(series.values(), &[1.0, 0.0, 2.5, 4.0]);

        let empty: CategorySeries = "  ".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_display_is_comma_separated() {
        assert_eq!(CategorySeries::from([1.0, 0.0, 2.5]).to_string(), "1,0,2.5");
        assert_eq!(CategorySeries::default().to_string(), "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "1,two,3".parse::<CategorySeries>().unwrap_err();
        assert_eq!(err.token, "two");
    }
}
