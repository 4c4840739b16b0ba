use crate::models::RawProfileRow;

/// Embedded reference table of historical budget profiles
///
/// Each row carries the observed monthly amounts, the strategy the household
/// followed, and the success rate recorded for it.
pub fn reference_rows() -> Vec<RawProfileRow> {
    vec![
        row(1, 1623.0, 810.0, 490.0, 323.0, "50/30/20", 0.87),
        row(2, 4801.0, 2850.0, 940.0, 1011.0, "60/20/20", 0.92),
        row(3, 1250.0, 505.0, 498.0, 247.0, "40/40/20", 0.78),
        row(4, 4150.0, 2910.0, 820.0, 420.0, "70/20/10", 0.81),
        row(5, 895.0, 540.0, 178.0, 177.0, "60/20/20", 0.65),
    ]
}

/// Short human description of a known strategy label
pub fn strategy_description(strategy: &str) -> Option<&'static str> {
    match strategy {
        "50/30/20" => Some("50% needs, 30% wants, 20% savings - classic balance"),
        "60/20/20" => Some("60% needs, 20% wants, 20% savings - cautious"),
        "40/40/20" => Some("40% needs, 40% wants, 20% savings - lifestyle"),
        "70/20/10" => Some("70% needs, 20% wants, 10% savings - security first"),
        "60/30/10" => Some("60% needs, 30% wants, 10% savings - comfort balance"),
        _ => None,
    }
}

fn row(
    id: u32,
    income: f64,
    needs: f64,
    wants: f64,
    savings: f64,
    strategy: &str,
    success_rate: f64,
) -> RawProfileRow {
    RawProfileRow {
        id,
        income,
        needs,
        wants,
        savings,
        strategy: strategy.to_string(),
        success_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rows_balance() {
        for row in reference_rows() {
            assert_eq!(
                row.needs + row.wants + row.savings,
                row.income,
                "row {} amounts must sum to income",
                row.id
            );
        }
    }

    #[test]
    fn test_known_strategies_have_descriptions() {
        for row in reference_rows() {
            assert!(strategy_description(&row.strategy).is_some());
        }
        assert!(strategy_description("99/1/0").is_none());
    }
}
