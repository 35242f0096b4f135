use super::{rates, ui};
use crate::core::{CalculationResult, QuoteName, RateProvider, Session, evaluate};
use anyhow::{Context, Result, anyhow};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "Commands:
  income <amount>   set the monthly income in pesos
  months <count>    set how many months the fund should cover
  quote <key>       pick the quote: oficial, blue or mep
  calc              calculate (an empty line does the same)
  clear             reset every field
  show              show the current state
  help              show this help
  quit              exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Income(String),
    Months(String),
    Quote(QuoteName),
    Calculate,
    Clear,
    Show,
    Help,
    Quit,
}

pub fn parse_action(line: &str) -> Result<Action> {
    let line = line.trim();
    let (command, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, a)| (c, a.trim()));

    match command.to_lowercase().as_str() {
        "" | "calc" | "calculate" => Ok(Action::Calculate),
        "income" => Ok(Action::Income(arg.to_string())),
        "months" => Ok(Action::Months(arg.to_string())),
        "quote" => Ok(Action::Quote(arg.parse()?)),
        "clear" => Ok(Action::Clear),
        "show" => Ok(Action::Show),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        other => Err(anyhow!("Unknown command: {} (type 'help')", other)),
    }
}

/// Current form state and results.
pub fn render(session: &Session) -> String {
    let input = session.input();
    let mut output = ui::quotes_table(&session.rates().snapshot(), Some(input.quote)).to_string();

    output.push_str(&format!(
        "\nIncome (ARS): {}\nMonths: {}\n\n",
        input.income, input.months
    ));
    output.push_str(&ui::format_results(input, session.displayed()));
    output
}

/// Reads actions until `quit` or end of input, re-rendering after each one.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut reader: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{}\n", render(session))?;
    writeln!(out, "{}", ui::style_text(HELP, ui::StyleType::Subtle))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if reader
            .read_line(&mut line)
            .context("Failed to read input")?
            == 0
        {
            break;
        }

        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(e) => {
                writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
                continue;
            }
        };
        debug!(?action, "Handling action");

        match action {
            Action::Quit => break,
            Action::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Action::Income(text) => session.set_income(&text),
            Action::Months(text) => session.set_months(&text),
            Action::Quote(quote) => {
                if let Some(result) = session.select_quote(quote) {
                    report_not_ready(session, &result, &mut out)?;
                }
            }
            Action::Clear => session.clear(),
            Action::Show => {}
            Action::Calculate => {
                if !session.can_submit() {
                    writeln!(
                        out,
                        "{}",
                        ui::style_text(
                            "Enter both income and months before calculating",
                            ui::StyleType::Error
                        )
                    )?;
                    continue;
                }
                let result = session.submit();
                report_not_ready(session, &result, &mut out)?;
            }
        }

        writeln!(out, "\n{}\n", render(session))?;
    }

    Ok(())
}

/// Prints why `result` could not be calculated, if it wasn't.
fn report_not_ready<W: Write>(
    session: &Session,
    result: &CalculationResult,
    out: &mut W,
) -> Result<()> {
    if !result.is_ready
        && let Err(e) = evaluate(session.input(), &session.rates().snapshot())
    {
        writeln!(out, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?;
    }
    Ok(())
}

pub async fn run(rates: &RateProvider, default_quote: QuoteName) -> Result<()> {
    if !rates::load(rates).await {
        println!(
            "{}",
            ui::style_text(
                "Exchange rates could not be loaded; calculations are unavailable.",
                ui::StyleType::Error
            )
        );
    }

    println!(
        "{}\n",
        ui::style_text("Emergency fund calculator", ui::StyleType::Title)
    );

    let mut session = Session::with_quote(rates, default_quote);
    // Reading stdin blocks, so keep it off the async worker
    tokio::task::block_in_place(|| {
        let stdin = std::io::stdin();
        run_loop(&mut session, stdin.lock(), std::io::stdout())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::tests::StaticSource;
    use std::io::Cursor;
    use std::sync::Arc;

    async fn loaded_provider() -> RateProvider {
        let provider = RateProvider::new(Arc::new(StaticSource::new(500.0, 1000.0, 1100.0)));
        provider.fetch_rates().await.unwrap();
        provider
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run_loop(session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("").unwrap(), Action::Calculate);
        assert_eq!(parse_action("  \n").unwrap(), Action::Calculate);
        assert_eq!(
            parse_action("income 100000").unwrap(),
            Action::Income("100000".to_string())
        );
        assert_eq!(parse_action("income").unwrap(), Action::Income(String::new()));
        assert_eq!(
            parse_action("MONTHS   6 ").unwrap(),
            Action::Months("6".to_string())
        );
        assert_eq!(
            parse_action("quote mep").unwrap(),
            Action::Quote(QuoteName::Mep)
        );
        assert_eq!(parse_action("quit").unwrap(), Action::Quit);
        assert!(parse_action("quote euro").is_err());
        assert!(parse_action("withdraw 10").is_err());
    }

    #[tokio::test]
    async fn test_enter_calculates_and_quote_change_recalculates() {
        let rates = loaded_provider().await;
        let mut session = Session::new(&rates);

        let output = run_script(&mut session, "income 100000\nmonths 6\n\nquote blue\nquit\n");

        assert!(output.contains("Emergency fund in Dólar Oficial: $600.00"));
        assert!(output.contains("Monthly income in Dólar Blue: $200.00"));
        assert!(output.contains("Emergency fund in Dólar Blue: $1200.00"));
        assert_eq!(session.displayed().emergency_fund_display(), "1200.00");
    }

    #[tokio::test]
    async fn test_switch_to_unloaded_quote_reports_reason() {
        let rates = RateProvider::new(Arc::new(StaticSource::new(0.0, 1000.0, 1100.0)));
        rates.fetch_rates().await.unwrap();
        let mut session = Session::new(&rates);

        let output = run_script(&mut session, "income 100000\nmonths 6\ncalc\nquote blue\n");

        assert!(output.contains("No rate available for Dólar Blue"));
        assert_eq!(session.displayed().emergency_fund_display(), "600.00");
    }

    #[tokio::test]
    async fn test_incomplete_fields_are_rejected() {
        let rates = loaded_provider().await;
        let mut session = Session::new(&rates);

        let output = run_script(&mut session, "months 6\ncalc\n");

        assert!(output.contains("Enter both income and months"));
        assert!(!session.is_calculated());
    }

    #[tokio::test]
    async fn test_invalid_number_reports_reason() {
        let rates = loaded_provider().await;
        let mut session = Session::new(&rates);

        let output = run_script(&mut session, "income abc\nmonths 6\ncalc\n");

        assert!(output.contains("Invalid income"));
        assert!(!session.displayed().is_ready);
    }

    #[tokio::test]
    async fn test_clear_resets_session() {
        let rates = loaded_provider().await;
        let mut session = Session::with_quote(&rates, QuoteName::Mep);

        run_script(&mut session, "income 100000\nmonths 6\ncalc\nclear\n");

        assert!(!session.is_calculated());
        assert_eq!(session.input().quote, QuoteName::Official);
        assert!(session.input().income.is_empty());
    }
}
