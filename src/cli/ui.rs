use crate::core::{CalculationInput, CalculationResult, QuoteName, RateSnapshot};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats a sell price, showing "N/A" for quotes that never loaded.
pub fn price_cell(price: f64) -> Cell {
    if price > 0.0 {
        Cell::new(format!("{price:.2}")).set_alignment(CellAlignment::Right)
    } else {
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right)
    }
}

/// Table of the three quotes, marking `selected` when given.
pub fn quotes_table(snapshot: &RateSnapshot, selected: Option<QuoteName>) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell(""),
        header_cell("Key"),
        header_cell("Quote"),
        header_cell("Sell (ARS)"),
    ]);

    for quote in QuoteName::ALL {
        let marker = if selected == Some(quote) { "*" } else { "" };
        table.add_row(vec![
            Cell::new(marker).fg(Color::Green),
            Cell::new(quote.key()),
            Cell::new(quote.label()),
            price_cell(snapshot.get(quote)),
        ]);
    }
    table
}

/// Result lines labeled with the selected quote. Empty values are shown as-is
/// so a cleared session renders blanks.
pub fn format_results(input: &CalculationInput, result: &CalculationResult) -> String {
    let label = input.quote.label();
    let mut output = format!(
        "Monthly income in {}: ${}\nEmergency fund in {}: ${}",
        label,
        result.converted_income_display(),
        label,
        result.emergency_fund_display(),
    );

    if result.is_ready {
        output.push_str(&format!(
            "\n\n{}",
            style_text(
                &format!(
                    "You need to save ${} to build an emergency fund of {} months.",
                    result.emergency_fund_display(),
                    input.months.trim()
                ),
                StyleType::TotalValue
            )
        ));
    }
    output
}

/// Creates a spinner shown while quotes are fetched.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RateSnapshot {
        [
            (QuoteName::Blue, 1200.0),
            (QuoteName::Official, 1000.0),
            (QuoteName::Mep, 0.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_quotes_table_lists_all_quotes() {
        let rendered = quotes_table(&snapshot(), Some(QuoteName::Blue)).to_string();
        assert!(rendered.contains("Dólar Oficial"));
        assert!(rendered.contains("1000.00"));
        assert!(rendered.contains("Dólar Blue"));
        assert!(rendered.contains("1200.00"));
        assert!(rendered.contains("Dólar MEP"));
        assert!(rendered.contains("N/A"));
    }

    #[test]
    fn test_format_results_ready() {
        let input = CalculationInput::new("100000", "6", QuoteName::Official);
        let result = CalculationResult {
            converted_income: 100.0,
            emergency_fund: 600.0,
            is_ready: true,
        };
        let output = format_results(&input, &result);
        assert!(output.contains("Monthly income in Dólar Oficial: $100.00"));
        assert!(output.contains("Emergency fund in Dólar Oficial: $600.00"));
        assert!(output.contains("emergency fund of 6 months"));
    }

    #[test]
    fn test_format_results_not_ready() {
        let input = CalculationInput::default();
        let output = format_results(&input, &CalculationResult::not_ready());
        assert!(output.contains("Monthly income in Dólar Oficial: $\n"));
        assert!(!output.contains("You need to save"));
    }
}
