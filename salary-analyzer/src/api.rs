use crate::salary::SalaryRange;

/// Trait for estimating a single salary figure from a vacancy listing
///
/// Every job site names its salary fields differently and reports rubles with its
/// own currency code, implementors only map their fields onto a [`SalaryRange`].
pub trait PredictSalary {
    /// Currency code the site uses for rubles
    const CURRENCY: &'static str;

    fn salary_range(&self) -> Option<SalaryRange<'_>>;

    fn predict_rub_salary(&self) -> Option<f64> {
        self.salary_range()?.estimate(Self::CURRENCY)
    }
}
