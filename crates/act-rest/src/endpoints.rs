//! API endpoint paths and request/response wire types.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST: obtain an access/refresh token pair from credentials.
pub const TOKEN: &str = "token/";

/// POST: exchange a refresh token for a new access token.
pub const TOKEN_REFRESH: &str = "token/refresh/";

/// POST: register a new user account.
pub const REGISTER: &str = "register/";

/// GET: details of the authenticated user.
pub const USER: &str = "user/";

/// GET: list assets.
pub const ASSETS: &str = "assets/";

/// GET: list portfolios.
pub const PORTFOLIOS: &str = "portfolios/";

/// GET: list clients.
pub const CLIENTS: &str = "clients/";

/// GET: list funds.
pub const FUNDS: &str = "funds/";

/// POST: execute a basket purchase/sale.
pub const PURCHASE: &str = "purchase/";

/// GET list / POST create orders.
pub const ORDERS: &str = "orders/";

/// GET: news feed.
pub const YAHOO_NEWS: &str = "yahoo-news/";

/// POST: AI price forecast for a symbol.
pub const PREDICT: &str = "act-ai/predict/";

/// GET: AI trade rating for a symbol.
pub const TRADE_RATING: &str = "act-ai/trade-rating/";

/// POST: AI chat.
pub const CHAT: &str = "act-ai/chat/";

/// GET: market quote for a symbol.
pub const STOCK_DATA: &str = "act-ai/stock-data/";

/// GET list / POST create support requests.
pub const SUPPORT_REQUESTS: &str = "support-requests/";

/// Returns the dashboard path for a fund manager.
pub fn dashboard_path(username: &str) -> String {
    format!("dashboard/{}/", username)
}

/// Returns the detail path for an asset.
pub fn asset_path(asset_id: &str) -> String {
    format!("assets/{}/", asset_id)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for the token endpoint.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub password: &'a str,
}

/// Response from the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request body for the refresh endpoint.
#[derive(Debug, Serialize)]
pub struct TokenRefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from the refresh endpoint.
///
/// `refresh` is present only when the server rotates refresh tokens.
#[derive(Debug, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request body for registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
}

/// Request body for a basket purchase/sale.
#[derive(Debug, Serialize)]
pub struct PurchaseRequest<'a> {
    pub stocks: &'a [String],
    pub cryptos: &'a [String],
}

/// Response from order creation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    pub order_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope from the news endpoint.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub body: Vec<act_core::models::NewsArticle>,
}

/// Request body for the AI predict endpoint.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub symbol: &'a str,
}

/// Response from the trade rating endpoint.
#[derive(Debug, Deserialize)]
pub struct TradeRatingResponse {
    pub trade_rating: f64,
}

/// Request body for the AI chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Response from the AI chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(alias = "response", alias = "answer")]
    pub reply: String,
}

/// Request body for filing a support request.
#[derive(Debug, Serialize)]
pub struct SupportRequestCreate<'a> {
    pub request: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
}

/// Response from support request creation.
#[derive(Debug, Clone, Deserialize)]
pub struct SupportRequestCreated {
    pub support_request_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the API.
///
/// The server is inconsistent about the field name: authentication failures
/// use `detail` (with a machine `code`), most handlers use `error`, a few
/// use `message`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The most specific human-readable message present.
    pub fn detail(&self) -> Option<String> {
        self.detail
            .clone()
            .or_else(|| self.error.clone())
            .or_else(|| self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_request_omits_absent_identifiers() {
        let body = TokenRequest {
            username: None,
            email: Some("a@b.com"),
            password: "x",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("username").is_none());
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn error_body_prefers_detail() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"detail": "token expired", "code": "token_not_valid", "error": "other"}"#,
        )
        .unwrap();
        assert_eq!(body.detail(), Some("token expired".to_string()));
    }

    #[test]
    fn error_body_falls_back_to_error_and_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": "Symbol is required"}"#).unwrap();
        assert_eq!(body.detail(), Some("Symbol is required".to_string()));

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message": "No history found"}"#).unwrap();
        assert_eq!(body.detail(), Some("No history found".to_string()));
    }
}
