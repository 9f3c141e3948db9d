//! Field processors
//!
//! One normalization routine per metric field, dispatched through a single
//! exhaustive `match`: adding a `MetricField` variant without deciding its
//! processing category is a compile error, not a silent runtime skip.
//!
//! Every processor reads the raw store, converts text to a typed value, and
//! rates it. A field with no raw record processes to `None`; a record whose
//! text does not parse produces a row with empty display text, which the
//! assembler suppresses.

use crate::classify::classify;
use crate::convert;
use crate::models::field::MetricField;
use crate::models::raw_data::RawSymbolData;
use crate::models::row::{MetricValue, ProcessedRow};
use tracing::warn;

/// Run the processor for `field` against a raw data snapshot
pub fn process(field: MetricField, data: &RawSymbolData) -> Option<ProcessedRow> {
    use MetricField::*;

    match field {
        // Verbatim text, no numeric value, no rating
        Symbol | CompanyName | Exchange | ScrapeDate => string_field(field, data),

        // Plain decimal figures
        PeRatio | CurrentPrice | Change | Eps | Beta | Dividend | Peg | PriceToBook | EvToEbitda
        | PriceToFreeCashFlowPerShare | EnterpriseValueToRevenue => float_field(field, data),

        // Percent-rendered figures
        ChangePercent | ProfitMargin | DebtToEquity | Roic | RevenueGrowth
        | InstitutionalOwnership => percent_field(field, data),

        // Shorthand-magnitude figures ("2.5B", "750M")
        MarketCap | Revenue | GrossProfit | OperatingIncome | NetIncome | FreeCashFlow
        | TotalCash | TotalDebt => shorthand_field(field, data),

        // Rating depends on a second field
        ForwardPeRatio => dependent_float_field(field, PeRatio, data),
        EnterpriseValue => dependent_shorthand_field(field, MarketCap, data),
    }
}

fn string_field(field: MetricField, data: &RawSymbolData) -> Option<ProcessedRow> {
    let record = data.find(field)?;

    Some(ProcessedRow {
        field,
        raw_text: record.raw_text.clone(),
        display_text: record.raw_text.clone(),
        underlying: None,
        rating: None,
    })
}

fn float_field(field: MetricField, data: &RawSymbolData) -> Option<ProcessedRow> {
    let record = data.find(field)?;
    let value = convert::parse_float(&record.raw_text);

    Some(ProcessedRow {
        field,
        raw_text: record.raw_text.clone(),
        display_text: value.map(render_number).unwrap_or_default(),
        underlying: value.map(MetricValue::Num),
        rating: classify(field, value, None),
    })
}

fn percent_field(field: MetricField, data: &RawSymbolData) -> Option<ProcessedRow> {
    let record = data.find(field)?;
    let value = convert::parse_percent(&record.raw_text);

    Some(ProcessedRow {
        field,
        raw_text: record.raw_text.clone(),
        display_text: value.map(render_number).unwrap_or_default(),
        underlying: value.map(MetricValue::Num),
        rating: classify(field, value, None),
    })
}

fn shorthand_field(field: MetricField, data: &RawSymbolData) -> Option<ProcessedRow> {
    let record = data.find(field)?;
    let value = convert::parse_shorthand(&record.raw_text);

    // Display keeps the compact shorthand the page showed; the expanded
    // figure goes in the underlying value for comparisons.
    Some(ProcessedRow {
        field,
        raw_text: record.raw_text.clone(),
        display_text: value.map(|_| record.raw_text.clone()).unwrap_or_default(),
        underlying: value.map(MetricValue::Num),
        rating: classify(field, value, None),
    })
}

fn dependent_float_field(
    field: MetricField,
    comparison_field: MetricField,
    data: &RawSymbolData,
) -> Option<ProcessedRow> {
    let record = data.find(field)?;
    let comparison = lookup_comparison(field, comparison_field, data, convert::parse_float);
    let value = convert::parse_float(&record.raw_text);

    Some(ProcessedRow {
        field,
        raw_text: record.raw_text.clone(),
        display_text: value.map(render_number).unwrap_or_default(),
        underlying: value.map(MetricValue::Num),
        rating: classify(field, value, comparison),
    })
}

fn dependent_shorthand_field(
    field: MetricField,
    comparison_field: MetricField,
    data: &RawSymbolData,
) -> Option<ProcessedRow> {
    let record = data.find(field)?;
    let comparison = lookup_comparison(field, comparison_field, data, convert::parse_shorthand);
    let value = convert::parse_shorthand(&record.raw_text);

    Some(ProcessedRow {
        field,
        raw_text: record.raw_text.clone(),
        display_text: value.map(|_| record.raw_text.clone()).unwrap_or_default(),
        underlying: value.map(MetricValue::Num),
        rating: classify(field, value, comparison),
    })
}

/// Fetch and parse a dependent field's comparison value.
///
/// A missing comparison record is worth a warning but never stops the
/// primary field from processing; its rating just degrades to none.
fn lookup_comparison(
    field: MetricField,
    comparison_field: MetricField,
    data: &RawSymbolData,
    parse: fn(&str) -> Option<f64>,
) -> Option<f64> {
    match convert::raw_text(data, comparison_field) {
        Some(text) => parse(text),
        None => {
            warn!(
                "Missing comparison field {:?} while processing {:?}",
                comparison_field, field
            );
            None
        }
    }
}

fn render_number(value: f64) -> String {
    value.to_string()
}
