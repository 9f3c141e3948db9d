//! Metric rating engine
//!
//! Maps a field identity and its numeric value (plus an optional comparison
//! value for the two dependent fields) to a qualitative rating. Total over
//! the whole field set: fields without a rule simply rate as `None`.
//!
//! Quirk carried over from the original pipeline: a value of exactly 0 is
//! treated the same as a missing value (warn, no rating). Whether a genuine
//! 0 reading (say, zero debt-to-equity) should rate is an open product
//! question; until it is answered the zero-is-missing behavior stands.

use crate::models::field::MetricField;
use crate::models::row::Rating;
use tracing::warn;

/// Drop values the pipeline considers missing (absent or exactly zero)
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Rate a metric value.
///
/// `comparison` is only consulted by the dependent fields (forward P/E
/// against trailing P/E, enterprise value against market cap); a missing
/// comparison degrades the rating to `None`, it is never an error.
pub fn classify(
    field: MetricField,
    value: Option<f64>,
    comparison: Option<f64>,
) -> Option<Rating> {
    let value = match usable(value) {
        Some(v) => v,
        None => {
            warn!("Invalid value for metric {:?}", field);
            return None;
        }
    };
    let comparison = usable(comparison);

    match field {
        MetricField::PeRatio => {
            if value > 5.0 && value <= 15.0 {
                Some(Rating::Favorable)
            } else if value > 15.0 && value <= 18.0 {
                Some(Rating::Caution)
            } else if value > 18.0 {
                Some(Rating::Unfavorable)
            } else {
                None
            }
        }

        MetricField::ForwardPeRatio => {
            let trailing = comparison?;
            if value < trailing {
                Some(Rating::Favorable)
            } else {
                None
            }
        }

        MetricField::EnterpriseValue => {
            let market_cap = comparison?;
            if value < market_cap {
                Some(Rating::Favorable)
            } else {
                Some(Rating::Caution)
            }
        }

        MetricField::MarketCap => {
            if value < 100_000_000.0 {
                Some(Rating::Caution)
            } else {
                None
            }
        }

        MetricField::ProfitMargin => {
            if value < 0.5 {
                Some(Rating::Unfavorable)
            } else if value < 10.0 {
                Some(Rating::Caution)
            } else {
                Some(Rating::Favorable)
            }
        }

        MetricField::DebtToEquity => {
            if value > 70.0 {
                Some(Rating::Unfavorable)
            } else if value > 50.0 {
                Some(Rating::Caution)
            } else if value >= 0.0 {
                Some(Rating::Favorable)
            } else {
                None
            }
        }

        MetricField::RevenueGrowth => {
            if value < 0.0 {
                Some(Rating::Unfavorable)
            } else {
                None
            }
        }

        MetricField::PriceToFreeCashFlowPerShare => {
            if value < 18.0 {
                Some(Rating::Favorable)
            } else if value < 24.0 {
                Some(Rating::Caution)
            } else {
                Some(Rating::Unfavorable)
            }
        }

        MetricField::InstitutionalOwnership => {
            if value < 50.0 {
                Some(Rating::Favorable)
            } else if value < 80.0 {
                Some(Rating::Caution)
            } else {
                Some(Rating::Unfavorable)
            }
        }

        MetricField::Roic => {
            if value < 6.0 {
                Some(Rating::Unfavorable)
            } else if value < 10.0 {
                Some(Rating::Caution)
            } else {
                Some(Rating::Favorable)
            }
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pe_ratio_bands() {
        assert_eq!(classify(MetricField::PeRatio, Some(12.0), None), Some(Rating::Favorable));
        assert_eq!(classify(MetricField::PeRatio, Some(15.0), None), Some(Rating::Favorable));
        assert_eq!(classify(MetricField::PeRatio, Some(16.0), None), Some(Rating::Caution));
        assert_eq!(classify(MetricField::PeRatio, Some(18.0), None), Some(Rating::Caution));
        assert_eq!(classify(MetricField::PeRatio, Some(20.0), None), Some(Rating::Unfavorable));
        assert_eq!(classify(MetricField::PeRatio, Some(3.0), None), None);
        assert_eq!(classify(MetricField::PeRatio, Some(5.0), None), None);
        assert_eq!(classify(MetricField::PeRatio, None, None), None);
    }

    #[test]
    fn test_forward_pe_needs_trailing_comparison() {
        assert_eq!(
            classify(MetricField::ForwardPeRatio, Some(10.0), Some(14.0)),
            Some(Rating::Favorable)
        );
        assert_eq!(classify(MetricField::ForwardPeRatio, Some(16.0), Some(14.0)), None);
        assert_eq!(classify(MetricField::ForwardPeRatio, Some(10.0), None), None);
    }

    #[test]
    fn test_enterprise_value_against_market_cap() {
        assert_eq!(
            classify(MetricField::EnterpriseValue, Some(50.0), Some(100.0)),
            Some(Rating::Favorable)
        );
        assert_eq!(
            classify(MetricField::EnterpriseValue, Some(150.0), Some(100.0)),
            Some(Rating::Caution)
        );
        assert_eq!(classify(MetricField::EnterpriseValue, Some(50.0), None), None);
    }

    #[test]
    fn test_market_cap_small_cap_caution() {
        assert_eq!(
            classify(MetricField::MarketCap, Some(50_000_000.0), None),
            Some(Rating::Caution)
        );
        assert_eq!(classify(MetricField::MarketCap, Some(2_500_000_000.0), None), None);
    }

    #[test]
    fn test_profit_margin_bands() {
        assert_eq!(classify(MetricField::ProfitMargin, Some(0.4), None), Some(Rating::Unfavorable));
        assert_eq!(classify(MetricField::ProfitMargin, Some(-3.0), None), Some(Rating::Unfavorable));
        assert_eq!(classify(MetricField::ProfitMargin, Some(0.5), None), Some(Rating::Caution));
        assert_eq!(classify(MetricField::ProfitMargin, Some(9.9), None), Some(Rating::Caution));
        assert_eq!(classify(MetricField::ProfitMargin, Some(10.0), None), Some(Rating::Favorable));
    }

    #[test]
    fn test_debt_to_equity_bands() {
        assert_eq!(classify(MetricField::DebtToEquity, Some(80.0), None), Some(Rating::Unfavorable));
        assert_eq!(classify(MetricField::DebtToEquity, Some(60.0), None), Some(Rating::Caution));
        assert_eq!(classify(MetricField::DebtToEquity, Some(35.0), None), Some(Rating::Favorable));
        assert_eq!(classify(MetricField::DebtToEquity, Some(-5.0), None), None);
    }

    #[test]
    fn test_revenue_growth_only_flags_contraction() {
        assert_eq!(classify(MetricField::RevenueGrowth, Some(-2.0), None), Some(Rating::Unfavorable));
        assert_eq!(classify(MetricField::RevenueGrowth, Some(8.0), None), None);
    }

    #[test]
    fn test_price_to_fcf_bands() {
        assert_eq!(
            classify(MetricField::PriceToFreeCashFlowPerShare, Some(15.0), None),
            Some(Rating::Favorable)
        );
        assert_eq!(
            classify(MetricField::PriceToFreeCashFlowPerShare, Some(20.0), None),
            Some(Rating::Caution)
        );
        assert_eq!(
            classify(MetricField::PriceToFreeCashFlowPerShare, Some(30.0), None),
            Some(Rating::Unfavorable)
        );
    }

    #[test]
    fn test_institutional_ownership_bands() {
        assert_eq!(
            classify(MetricField::InstitutionalOwnership, Some(30.0), None),
            Some(Rating::Favorable)
        );
        assert_eq!(
            classify(MetricField::InstitutionalOwnership, Some(65.0), None),
            Some(Rating::Caution)
        );
        assert_eq!(
            classify(MetricField::InstitutionalOwnership, Some(90.0), None),
            Some(Rating::Unfavorable)
        );
    }

    #[test]
    fn test_roic_bands() {
        assert_eq!(classify(MetricField::Roic, Some(4.0), None), Some(Rating::Unfavorable));
        assert_eq!(classify(MetricField::Roic, Some(8.0), None), Some(Rating::Caution));
        assert_eq!(classify(MetricField::Roic, Some(12.0), None), Some(Rating::Favorable));
    }

    #[test]
    fn test_unmapped_fields_never_rate() {
        assert_eq!(classify(MetricField::Beta, Some(1.2), None), None);
        assert_eq!(classify(MetricField::Symbol, Some(1.0), None), None);
        assert_eq!(classify(MetricField::Eps, Some(3.5), None), None);
    }

    #[test]
    fn test_zero_value_is_treated_as_missing() {
        assert_eq!(classify(MetricField::DebtToEquity, Some(0.0), None), None);
        assert_eq!(classify(MetricField::PeRatio, Some(0.0), None), None);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(MetricField::PeRatio, Some(12.0), None), Some(Rating::Favorable));
        }
    }
}
