//! Emergency fund arithmetic over user-entered text and a rate snapshot.

use super::error::CalculationError;
use super::quote::QuoteName;
use super::rates::RateSnapshot;

/// Form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationInput {
    /// Monthly income in pesos
    pub income: String,
    /// Number of months the fund should cover
    pub months: String,
    pub quote: QuoteName,
}

impl CalculationInput {
    pub fn new(income: &str, months: &str, quote: QuoteName) -> Self {
        Self {
            income: income.to_string(),
            months: months.to_string(),
            quote,
        }
    }

    /// Both numeric fields have some text in them.
    pub fn is_complete(&self) -> bool {
        !self.income.trim().is_empty() && !self.months.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculationResult {
    pub converted_income: f64,
    pub emergency_fund: f64,
    pub is_ready: bool,
}

impl CalculationResult {
    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Converted income rounded to cents, empty when not ready.
    pub fn converted_income_display(&self) -> String {
        display_amount(self.is_ready, self.converted_income)
    }

    /// Emergency fund rounded to cents, empty when not ready.
    pub fn emergency_fund_display(&self) -> String {
        display_amount(self.is_ready, self.emergency_fund)
    }
}

/// Rounds to cents with ties going away from zero, then formats.
fn display_amount(is_ready: bool, value: f64) -> String {
    if is_ready {
        let cents = value * 100.0;
        // Values this large have no fractional part left to round
        let rounded = if cents.is_finite() {
            cents.round() / 100.0
        } else {
            value
        };
        format!("{rounded:.2}")
    } else {
        String::new()
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64, CalculationError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalculationError::InvalidInput {
            field,
            value: value.to_string(),
        })
}

/// Computes the result, reporting why it is not ready when it can't be.
pub fn evaluate(
    input: &CalculationInput,
    rates: &RateSnapshot,
) -> Result<CalculationResult, CalculationError> {
    let income = parse_field("income", &input.income)?;
    let months = parse_field("months", &input.months)?;

    let rate = rates.get(input.quote);
    if rate.is_nan() || rate <= 0.0 {
        return Err(CalculationError::RateUnavailable(input.quote));
    }

    let converted_income = income / rate;
    let emergency_fund = converted_income * months;
    if !converted_income.is_finite() || !emergency_fund.is_finite() {
        return Err(CalculationError::OutOfRange);
    }

    Ok(CalculationResult {
        converted_income,
        emergency_fund,
        is_ready: true,
    })
}

/// Same as [`evaluate`], folding every failure into a not-ready result.
pub fn calculate(input: &CalculationInput, rates: &RateSnapshot) -> CalculationResult {
    evaluate(input, rates).unwrap_or_else(|_| CalculationResult::not_ready())
}
