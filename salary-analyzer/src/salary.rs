/// Salary bounds of a single vacancy, borrowed from the deserialized listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange<'a> {
    currency: &'a str,
    from: Option<f64>,
    to: Option<f64>,
}

impl<'a> SalaryRange<'a> {
    /// Zero bounds count as missing, SuperJob reports `0` for an unspecified payment
    pub fn new(currency: &'a str, from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            currency,
            from: from.filter(|v| *v > 0.0),
            to: to.filter(|v| *v > 0.0),
        }
    }

    /// Midpoint of both bounds, the lower bound alone, or 80% of the upper bound.
    /// Returns `None` for a foreign currency or when no bound is given.
    pub fn estimate(&self, expected_currency: &str) -> Option<f64> {
        if self.currency != expected_currency {
            return None;
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from + to) / 2.0),
            (Some(from), None) => Some(from),
            (None, Some(to)) => Some(to * 0.8),
            (None, None) => None,
        }
    }
}

/// Running collection of salary estimates for one language on one site
#[derive(Debug, Default)]
pub struct SalarySample {
    sum: f64,
    count: usize,
}

impl SalarySample {
    pub fn push(&mut self, salary: f64) {
        self.sum += salary;
        self.count += 1;
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of all estimates rounded down, `None` for an empty sample
    pub fn average(&self) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        Some((self.sum / self.count as f64).floor() as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_foreign_currency_is_unknown() {
        let ranges = [
            SalaryRange::new("USD", Some(1000.0), Some(2000.0)),
            SalaryRange::new("EUR", Some(1000.0), None),
            SalaryRange::new("KZT", None, Some(2000.0)),
            SalaryRange::new("", None, None),
        ];
        for range in ranges {
            assert_eq!(range.estimate("RUR"), None, "{:?}", range);
        }
    }

    #[test]
    fn test_currency_codes_are_case_sensitive() {
        let range = SalaryRange::new("rub", Some(100_000.0), None);
        assert_eq!(range.estimate("RUR"), None);
        assert_eq!(range.estimate("rub"), Some(100_000.0));
    }

    #[test]
    fn test_both_bounds_give_midpoint() {
        let range = SalaryRange::new("RUR", Some(100_000.0), Some(200_000.0));
        assert_eq!(range.estimate("RUR"), Some(150_000.0));

        let range = SalaryRange::new("RUR", Some(1.0), Some(2.0));
        assert_eq!(range.estimate("RUR"), Some(1.5));
    }

    #[test]
    fn test_lower_bound_only() {
        let range = SalaryRange::new("rub", Some(90_000.0), None);
        assert_eq!(range.estimate("rub"), Some(90_000.0));
    }

    #[test]
    fn test_upper_bound_only_is_discounted() {
        let range = SalaryRange::new("RUR", None, Some(100_000.0));
        assert_eq!(range.estimate("RUR"), Some(80_000.0));
    }

    #[test]
    fn test_no_bounds_is_unknown() {
        let range = SalaryRange::new("RUR", None, None);
        assert_eq!(range.estimate("RUR"), None);
    }

    #[test]
    fn test_zero_bounds_are_missing() {
        assert_eq!(SalaryRange::new("rub", Some(0.0), Some(0.0)).estimate("rub"), None);
        assert_eq!(
            SalaryRange::new("rub", Some(0.0), Some(50_000.0)).estimate("rub"),
            Some(40_000.0)
        );
        assert_eq!(
            SalaryRange::new("rub", Some(70_000.0), Some(0.0)).estimate("rub"),
            Some(70_000.0)
        );
    }

    #[test]
    fn test_average_is_floored_mean() {
        let mut sample = SalarySample::default();
        sample.push(100_000.0);
        sample.push(100_001.0);
        sample.push(100_001.0);
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.average(), Some(100_000));

        let mut sample = SalarySample::default();
        sample.push(80_000.0 * 0.8 + 0.5);
        assert_eq!(sample.average(), Some(64_000));
    }

    #[test]
    fn test_empty_sample_has_no_average() {
        let sample = SalarySample::default();
        assert!(sample.is_empty());
        assert_eq!(sample.average(), None);
    }
}
