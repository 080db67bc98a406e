//! Domain types: quotes, threshold rules, alerts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One asset's USD price and 24-hour percent change from the latest fetch.
///
/// Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub coin: String,
    pub price_usd: f64,
    pub change_24hr: f64,
}

impl Quote {
    pub fn new(coin: impl Into<String>, price_usd: f64, change_24hr: f64) -> Self {
        Self {
            coin: coin.into(),
            price_usd,
            change_24hr,
        }
    }
}

/// Optional lower and upper price bounds for one asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<f64>,
}

impl ThresholdRule {
    pub fn below(bound: f64) -> Self {
        Self {
            below: Some(bound),
            above: None,
        }
    }

    pub fn above(bound: f64) -> Self {
        Self {
            below: None,
            above: Some(bound),
        }
    }

    pub fn between(below: f64, above: f64) -> Self {
        Self {
            below: Some(below),
            above: Some(above),
        }
    }
}

/// Which side of a rule was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundKind {
    Lower,
    Upper,
}

/// A breached threshold. `Display` renders the alert message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub coin: String,
    pub kind: BoundKind,
    pub bound: f64,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            BoundKind::Lower => "fell below",
            BoundKind::Upper => "rose above",
        };
        write!(f, "{} {verb} ${}", self.coin.to_uppercase(), self.bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_message_uppercases_asset() {
        let alert = Alert {
            coin: "bitcoin".into(),
            kind: BoundKind::Lower,
            bound: 40_000.0,
        };
        assert_eq!(alert.to_string(), "BITCOIN fell below $40000");
    }

    #[test]
    fn alert_message_keeps_fractional_bound() {
        let alert = Alert {
            coin: "dogecoin".into(),
            kind: BoundKind::Upper,
            bound: 0.25,
        };
        assert_eq!(alert.to_string(), "DOGECOIN rose above $0.25");
    }

    #[test]
    fn rule_deserializes_partial_bounds() {
        let rule: ThresholdRule = toml::from_str("below = 2000").unwrap();
        assert_eq!(rule, ThresholdRule::below(2000.0));
    }
}
