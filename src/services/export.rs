//! Spreadsheet export
//!
//! Renders the processed rows of a finished capture as one tab-separated,
//! double-quoted row, ready to paste into a spreadsheet. Column order is
//! fixed; fields with no processed row render as empty cells.

use crate::models::field::MetricField;
use crate::services::presentation::ProcessedRowMap;
use chrono::Utc;

/// Export columns, in spreadsheet order
pub const EXPORT_COLUMNS: [MetricField; 12] = [
    MetricField::Symbol,
    MetricField::CompanyName,
    MetricField::CurrentPrice,
    MetricField::Change,
    MetricField::ChangePercent,
    MetricField::MarketCap,
    MetricField::PeRatio,
    MetricField::Eps,
    MetricField::Dividend,
    MetricField::Revenue,
    MetricField::NetIncome,
    MetricField::ScrapeDate,
];

/// Build the export row for a symbol's processed data.
///
/// The date column falls back to today's date (UTC, `YYYY-MM-DD`) when no
/// scrape-date row was captured, matching the stamp the original export put
/// on every row.
pub fn export_row(rows: &ProcessedRowMap) -> String {
    EXPORT_COLUMNS
        .iter()
        .map(|field| {
            let cell = match rows.get(field) {
                Some(row) => row.display_text.clone(),
                None if *field == MetricField::ScrapeDate => {
                    Utc::now().format("%Y-%m-%d").to_string()
                }
                None => String::new(),
            };
            format!("\"{}\"", cell)
        })
        .collect::<Vec<_>>()
        .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw_data::RawSymbolData;
    use crate::services::presentation::PresentationSymbol;

    #[test]
    fn test_export_row_has_one_quoted_cell_per_column() {
        let mut data = RawSymbolData::new();
        data.add_or_update(MetricField::Symbol, Some("ACME"));
        data.add_or_update(MetricField::MarketCap, Some("2.5B"));

        let mut presentation = PresentationSymbol::new();
        presentation.recompute_all(&data);

        let row = export_row(presentation.rows());
        let cells: Vec<&str> = row.split('\t').collect();

        assert_eq!(cells.len(), EXPORT_COLUMNS.len());
        assert_eq!(cells[0], "\"ACME\"");
        assert_eq!(cells[5], "\"2.5B\"");
        assert_eq!(cells[1], "\"\""); // company name missing
    }

    #[test]
    fn test_export_row_stamps_date_when_missing() {
        let rows = ProcessedRowMap::new();
        let row = export_row(&rows);
        let cells: Vec<&str> = row.split('\t').collect();

        let date_cell = cells.last().unwrap().trim_matches('"');
        assert_eq!(date_cell, Utc::now().format("%Y-%m-%d").to_string());
    }
}
