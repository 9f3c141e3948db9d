//! Metric field identities
//!
//! The closed set of financial metrics the capture flow recognizes. Field
//! identities are used as map keys throughout the pipeline and cross the
//! content-script boundary as plain data, so they serialize as stable
//! snake_case string tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recognized financial metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Symbol,
    CompanyName,
    Exchange,
    CurrentPrice,
    Change,
    ChangePercent,
    MarketCap,
    EnterpriseValue,
    EnterpriseValueToRevenue,
    EvToEbitda,
    PeRatio,
    ForwardPeRatio,
    Eps,
    Dividend,
    Revenue,
    GrossProfit,
    OperatingIncome,
    NetIncome,
    FreeCashFlow,
    PriceToFreeCashFlowPerShare,
    Peg,
    PriceToBook,
    TotalCash,
    TotalDebt,
    DebtToEquity,
    Roic,
    ProfitMargin,
    Beta,
    RevenueGrowth,
    InstitutionalOwnership,
    ScrapeDate,
}

/// Every metric field. Drives the processor registry and anything else that
/// must cover the whole set.
pub const ALL_FIELDS: [MetricField; 31] = [
    MetricField::Symbol,
    MetricField::CompanyName,
    MetricField::Exchange,
    MetricField::CurrentPrice,
    MetricField::Change,
    MetricField::ChangePercent,
    MetricField::MarketCap,
    MetricField::EnterpriseValue,
    MetricField::EnterpriseValueToRevenue,
    MetricField::EvToEbitda,
    MetricField::PeRatio,
    MetricField::ForwardPeRatio,
    MetricField::Eps,
    MetricField::Dividend,
    MetricField::Revenue,
    MetricField::GrossProfit,
    MetricField::OperatingIncome,
    MetricField::NetIncome,
    MetricField::FreeCashFlow,
    MetricField::PriceToFreeCashFlowPerShare,
    MetricField::Peg,
    MetricField::PriceToBook,
    MetricField::TotalCash,
    MetricField::TotalDebt,
    MetricField::DebtToEquity,
    MetricField::Roic,
    MetricField::ProfitMargin,
    MetricField::Beta,
    MetricField::RevenueGrowth,
    MetricField::InstitutionalOwnership,
    MetricField::ScrapeDate,
];

/// Fields a symbol profile needs before it counts as complete.
///
/// Order matters: the readiness preview renders one entry per field in
/// exactly this order.
pub const REQUIRED_FIELDS: [MetricField; 15] = [
    MetricField::Symbol,
    MetricField::CompanyName,
    MetricField::Exchange,
    MetricField::PeRatio,
    MetricField::ForwardPeRatio,
    MetricField::Beta,
    MetricField::MarketCap,
    MetricField::EnterpriseValue,
    MetricField::EvToEbitda,
    MetricField::ProfitMargin,
    MetricField::RevenueGrowth,
    MetricField::PriceToFreeCashFlowPerShare,
    MetricField::Roic,
    MetricField::DebtToEquity,
    MetricField::Dividend,
];

impl MetricField {
    /// Short label for the readiness preview panel
    pub fn abbreviation(&self) -> &'static str {
        match self {
            MetricField::Symbol => "SYM",
            MetricField::CompanyName => "NAME",
            MetricField::Exchange => "EXCH",
            MetricField::CurrentPrice => "PX",
            MetricField::Change => "CHG",
            MetricField::ChangePercent => "CHG%",
            MetricField::MarketCap => "MCAP",
            MetricField::EnterpriseValue => "EV",
            MetricField::EnterpriseValueToRevenue => "EV/R",
            MetricField::EvToEbitda => "EV/EBITDA",
            MetricField::PeRatio => "P/E",
            MetricField::ForwardPeRatio => "FWD P/E",
            MetricField::Eps => "EPS",
            MetricField::Dividend => "DIV",
            MetricField::Revenue => "REV",
            MetricField::GrossProfit => "GP",
            MetricField::OperatingIncome => "OPINC",
            MetricField::NetIncome => "NI",
            MetricField::FreeCashFlow => "FCF",
            MetricField::PriceToFreeCashFlowPerShare => "P/FCF",
            MetricField::Peg => "PEG",
            MetricField::PriceToBook => "P/B",
            MetricField::TotalCash => "CASH",
            MetricField::TotalDebt => "DEBT",
            MetricField::DebtToEquity => "D/E",
            MetricField::Roic => "ROIC",
            MetricField::ProfitMargin => "PM",
            MetricField::Beta => "BETA",
            MetricField::RevenueGrowth => "REVG",
            MetricField::InstitutionalOwnership => "INST",
            MetricField::ScrapeDate => "DATE",
        }
    }

    /// Human-readable name, used as preview tooltip text
    pub fn label(&self) -> &'static str {
        match self {
            MetricField::Symbol => "Ticker symbol",
            MetricField::CompanyName => "Company name",
            MetricField::Exchange => "Exchange",
            MetricField::CurrentPrice => "Current price",
            MetricField::Change => "Price change",
            MetricField::ChangePercent => "Price change %",
            MetricField::MarketCap => "Market cap",
            MetricField::EnterpriseValue => "Enterprise value",
            MetricField::EnterpriseValueToRevenue => "EV / revenue",
            MetricField::EvToEbitda => "EV / EBITDA",
            MetricField::PeRatio => "Trailing P/E ratio",
            MetricField::ForwardPeRatio => "Forward P/E ratio",
            MetricField::Eps => "Earnings per share",
            MetricField::Dividend => "Dividend yield",
            MetricField::Revenue => "Revenue",
            MetricField::GrossProfit => "Gross profit",
            MetricField::OperatingIncome => "Operating income",
            MetricField::NetIncome => "Net income",
            MetricField::FreeCashFlow => "Free cash flow",
            MetricField::PriceToFreeCashFlowPerShare => "Price / free cash flow per share",
            MetricField::Peg => "PEG ratio",
            MetricField::PriceToBook => "Price / book",
            MetricField::TotalCash => "Total cash",
            MetricField::TotalDebt => "Total debt",
            MetricField::DebtToEquity => "Debt / equity",
            MetricField::Roic => "Return on invested capital",
            MetricField::ProfitMargin => "Profit margin",
            MetricField::Beta => "Beta (5Y monthly)",
            MetricField::RevenueGrowth => "Revenue growth",
            MetricField::InstitutionalOwnership => "Institutional ownership",
            MetricField::ScrapeDate => "Date scraped",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_covers_every_variant_once() {
        use std::collections::HashSet;
        let unique: HashSet<_> = ALL_FIELDS.iter().collect();
        assert_eq!(unique.len(), ALL_FIELDS.len());
    }

    #[test]
    fn test_required_fields_are_known_fields() {
        for field in REQUIRED_FIELDS {
            assert!(ALL_FIELDS.contains(&field));
        }
    }

    #[test]
    fn test_serializes_as_stable_string_tag() {
        let json = serde_json::to_string(&MetricField::ForwardPeRatio).unwrap();
        assert_eq!(json, "\"forward_pe_ratio\"");

        let back: MetricField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MetricField::ForwardPeRatio);
    }

    #[test]
    fn test_preview_abbreviations_are_unique_for_required_fields() {
        use std::collections::HashSet;
        let unique: HashSet<_> = REQUIRED_FIELDS.iter().map(|f| f.abbreviation()).collect();
        assert_eq!(unique.len(), REQUIRED_FIELDS.len());
    }
}
