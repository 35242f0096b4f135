use super::{rates, ui};
use crate::core::{QuoteName, RateProvider, Session, evaluate};
use anyhow::{Context, Result};

/// Values given on the command line for a one-shot calculation.
#[derive(Debug, Clone)]
pub struct CalcArgs {
    pub income: String,
    pub months: String,
    pub quote: Option<QuoteName>,
}

pub async fn run(rates: &RateProvider, args: &CalcArgs, default_quote: QuoteName) -> Result<()> {
    rates::load(rates).await;

    let output = calculate_once(rates, args, default_quote)?;
    println!("{output}");
    Ok(())
}

/// Runs a single submit against the provider's current snapshot and renders
/// the outcome.
pub fn calculate_once(
    rates: &RateProvider,
    args: &CalcArgs,
    default_quote: QuoteName,
) -> Result<String> {
    let mut session = Session::with_quote(rates, args.quote.unwrap_or(default_quote));
    session.set_income(&args.income);
    session.set_months(&args.months);

    if !session.can_submit() {
        anyhow::bail!("Both income and months are required");
    }

    let result = session.submit();
    if !result.is_ready {
        // Report the same reason the calculator rejected the input for
        evaluate(session.input(), &rates.snapshot())
            .context("Cannot calculate the emergency fund")?;
    }

    Ok(ui::format_results(session.input(), session.displayed()))
}
