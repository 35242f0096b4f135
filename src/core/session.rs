//! Application state for one calculation session.
//!
//! The session owns what the user typed and what is currently shown, and
//! decides when a calculation runs: on an explicit submit, or on a quote change
//! once a previous calculation has succeeded. Callers re-render after each
//! mutation.

use super::calculator::{CalculationInput, CalculationResult, calculate};
use super::quote::QuoteName;
use super::rates::RateProvider;
use tracing::debug;

pub struct Session<'a> {
    rates: &'a RateProvider,
    input: CalculationInput,
    displayed: CalculationResult,
    calculated: bool,
}

impl<'a> Session<'a> {
    pub fn new(rates: &'a RateProvider) -> Self {
        Self::with_quote(rates, QuoteName::default())
    }

    pub fn with_quote(rates: &'a RateProvider, quote: QuoteName) -> Self {
        Self {
            rates,
            input: CalculationInput {
                quote,
                ..Default::default()
            },
            displayed: CalculationResult::not_ready(),
            calculated: false,
        }
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    /// Result currently on display; may be stale with respect to the input.
    pub fn displayed(&self) -> &CalculationResult {
        &self.displayed
    }

    /// Whether a calculation has succeeded since the last clear.
    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    pub fn rates(&self) -> &RateProvider {
        self.rates
    }

    pub fn can_submit(&self) -> bool {
        self.input.is_complete()
    }

    pub fn set_income(&mut self, text: &str) {
        debug!(income = text, "Income changed");
        self.input.income = text.to_string();
    }

    pub fn set_months(&mut self, text: &str) {
        debug!(months = text, "Months changed");
        self.input.months = text.to_string();
    }

    /// Changes the quote, recalculating right away if a previous calculation
    /// had succeeded.
    pub fn select_quote(&mut self, quote: QuoteName) -> Option<CalculationResult> {
        debug!(%quote, calculated = self.calculated, "Quote changed");
        self.input.quote = quote;
        if self.calculated {
            Some(self.submit())
        } else {
            None
        }
    }

    /// Runs a calculation against the latest snapshot. A ready result replaces
    /// the displayed one; a not-ready result leaves the display untouched.
    pub fn submit(&mut self) -> CalculationResult {
        let result = calculate(&self.input, &self.rates.snapshot());
        debug!(?result, "Calculated");
        if result.is_ready {
            self.displayed = result;
            self.calculated = true;
        }
        result
    }

    pub fn clear(&mut self) {
        debug!("Session cleared");
        self.input = CalculationInput::default();
        self.displayed = CalculationResult::not_ready();
        self.calculated = false;
    }
}
