//! Threshold rule evaluation.

use std::collections::BTreeMap;

use crate::domain::{Alert, BoundKind, Quote, ThresholdRule};

/// Compare every quote against its rule, if it has one.
///
/// Alerts come out in quote order; for a single asset the lower-bound alert
/// precedes the upper-bound alert. Both comparisons are strict.
pub fn evaluate(quotes: &[Quote], rules: &BTreeMap<String, ThresholdRule>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for quote in quotes {
        let Some(rule) = rules.get(&quote.coin) else {
            continue;
        };

        if let Some(below) = rule.below {
            if quote.price_usd < below {
                alerts.push(Alert {
                    coin: quote.coin.clone(),
                    kind: BoundKind::Lower,
                    bound: below,
                });
            }
        }

        if let Some(above) = rule.above {
            if quote.price_usd > above {
                alerts.push(Alert {
                    coin: quote.coin.clone(),
                    kind: BoundKind::Upper,
                    bound: above,
                });
            }
        }
    }

    alerts
}
