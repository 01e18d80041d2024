//! Domain models exchanged with the ACT platform API.
//!
//! Field names follow the wire format of the platform's REST serializers;
//! identifiers assigned by the backing document store are optional because
//! list and detail endpoints do not always include them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Symbol;

/// Platform role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    FundAdmin,
    FundManager,
    SystemAdmin,
    /// A role this client does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::FundAdmin => "fund_admin",
            Role::FundManager => "fund_manager",
            Role::SystemAdmin => "system_admin",
            Role::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

/// An authenticated user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// A tradeable asset held in a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub symbol: String,
    pub price: f64,
    pub volume: i64,
    pub amount: i64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    pub portfolio_id: String,
}

/// A portfolio belonging to a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub fund_id: String,
}

/// A client managed by a fund manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub fund_manager_id: i64,
}

/// A fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fund {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Buy/sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// An order against a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub order_type: OrderSide,
    pub amount: i64,
    pub portfolio_id: String,
}

/// A news article returned by the news feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    pub url: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A market quote for a single symbol.
///
/// The wire format uses the upstream market-data provider's single-letter
/// field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Current price.
    #[serde(rename = "c")]
    pub current: f64,
    /// Day high.
    #[serde(rename = "h", default)]
    pub high: Option<f64>,
    /// Day low.
    #[serde(rename = "l", default)]
    pub low: Option<f64>,
    /// Open price.
    #[serde(rename = "o", default)]
    pub open: Option<f64>,
    /// Previous close.
    #[serde(rename = "pc", default)]
    pub previous_close: Option<f64>,
    /// Absolute change.
    #[serde(rename = "d", default)]
    pub change: Option<f64>,
    /// Percent change.
    #[serde(rename = "dp", default)]
    pub percent_change: Option<f64>,
}

/// A support request filed by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub request: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Fund-manager dashboard metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: i64,
    pub number_of_alerts: i64,
    #[serde(default)]
    pub recent_activities: Vec<String>,
}

/// Which side of the threshold fires a price alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    /// Fire when the price rises to or above the threshold.
    Above,
    /// Fire when the price falls to or below the threshold.
    Below,
}

impl fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertDirection::Above => write!(f, "above"),
            AlertDirection::Below => write!(f, "below"),
        }
    }
}

/// A persisted price alert definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlert {
    pub symbol: Symbol,
    pub threshold: f64,
    pub direction: AlertDirection,
    pub created_at: DateTime<Utc>,
}

impl PriceAlert {
    /// Create a new alert stamped with the current time.
    pub fn new(symbol: Symbol, threshold: f64, direction: AlertDirection) -> Self {
        Self {
            symbol,
            threshold,
            direction,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the given price crosses the alert threshold.
    pub fn is_triggered(&self, price: f64) -> bool {
        match self.direction {
            AlertDirection::Above => price >= self.threshold,
            AlertDirection::Below => price <= self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_snake_case() {
        let role: Role = serde_json::from_str(r#""fund_admin""#).unwrap();
        assert_eq!(role, Role::FundAdmin);
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""fund_admin""#);
    }

    #[test]
    fn unknown_role_does_not_fail_deserialization() {
        let role: Role = serde_json::from_str(r#""auditor""#).unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn quote_parses_provider_field_names() {
        let quote: Quote = serde_json::from_str(
            r#"{"c": 182.5, "h": 184.0, "l": 181.2, "o": 183.0, "pc": 181.9, "d": 0.6, "dp": 0.33}"#,
        )
        .unwrap();
        assert_eq!(quote.current, 182.5);
        assert_eq!(quote.previous_close, Some(181.9));
    }

    #[test]
    fn dashboard_parses_camel_case() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"totalClients": 12, "numberOfAlerts": 3, "recentActivities": ["bought AAPL"]}"#,
        )
        .unwrap();
        assert_eq!(summary.total_clients, 12);
        assert_eq!(summary.number_of_alerts, 3);
        assert_eq!(summary.recent_activities, vec!["bought AAPL".to_string()]);
    }

    #[test]
    fn alert_triggers_on_threshold_crossing() {
        let symbol = Symbol::new("AAPL").unwrap();
        let above = PriceAlert::new(symbol.clone(), 100.0, AlertDirection::Above);
        assert!(above.is_triggered(100.0));
        assert!(above.is_triggered(101.5));
        assert!(!above.is_triggered(99.9));

        let below = PriceAlert::new(symbol, 100.0, AlertDirection::Below);
        assert!(below.is_triggered(100.0));
        assert!(below.is_triggered(42.0));
        assert!(!below.is_triggered(100.1));
    }
}
