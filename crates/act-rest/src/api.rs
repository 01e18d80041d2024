//! Typed API operations.
//!
//! Thin wrappers that build a [`RequestSpec`] per endpoint and execute it
//! through the session's authenticated request path.

use std::fmt;

use tracing::{debug, instrument};

use act_core::Result;
use act_core::models::{
    Asset, ClientAccount, DashboardSummary, Fund, NewsArticle, Order, Portfolio, Quote,
    SupportRequest, User,
};
use act_core::types::Symbol;

use crate::client::RequestSpec;
use crate::endpoints::{
    self, ChatRequest, ChatResponse, NewsResponse, OrderCreated, PredictRequest, PurchaseRequest,
    SupportRequestCreate, SupportRequestCreated, TradeRatingResponse,
};
use crate::session::Session;

/// News category filter for the news feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsKind {
    #[default]
    All,
    Video,
    Press,
}

impl NewsKind {
    fn as_str(&self) -> &'static str {
        match self {
            NewsKind::All => "ALL",
            NewsKind::Video => "VIDEO",
            NewsKind::Press => "PRESS",
        }
    }
}

impl fmt::Display for NewsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Session {
    /// Fetch the authenticated user's details.
    #[instrument(skip(self))]
    pub async fn user(&self) -> Result<User> {
        debug!("fetching user details");
        self.execute(RequestSpec::get(endpoints::USER)).await
    }

    /// List all assets.
    #[instrument(skip(self))]
    pub async fn assets(&self) -> Result<Vec<Asset>> {
        debug!("fetching assets");
        self.execute(RequestSpec::get(endpoints::ASSETS)).await
    }

    /// Fetch a single asset by id.
    #[instrument(skip(self))]
    pub async fn asset(&self, asset_id: &str) -> Result<Asset> {
        debug!("fetching asset");
        self.execute(RequestSpec::get(endpoints::asset_path(asset_id)))
            .await
    }

    /// List all portfolios.
    #[instrument(skip(self))]
    pub async fn portfolios(&self) -> Result<Vec<Portfolio>> {
        debug!("fetching portfolios");
        self.execute(RequestSpec::get(endpoints::PORTFOLIOS)).await
    }

    /// List all clients.
    #[instrument(skip(self))]
    pub async fn clients(&self) -> Result<Vec<ClientAccount>> {
        debug!("fetching clients");
        self.execute(RequestSpec::get(endpoints::CLIENTS)).await
    }

    /// List all funds.
    #[instrument(skip(self))]
    pub async fn funds(&self) -> Result<Vec<Fund>> {
        debug!("fetching funds");
        self.execute(RequestSpec::get(endpoints::FUNDS)).await
    }

    /// Execute a basket purchase or sale of stocks and cryptos.
    ///
    /// Returns the server's receipt as JSON.
    #[instrument(skip(self))]
    pub async fn purchase(
        &self,
        stocks: &[String],
        cryptos: &[String],
    ) -> Result<serde_json::Value> {
        debug!(stocks = stocks.len(), cryptos = cryptos.len(), "executing purchase");
        let body = PurchaseRequest { stocks, cryptos };
        self.execute(RequestSpec::post(endpoints::PURCHASE, &body)?)
            .await
    }

    /// List all orders.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>> {
        debug!("fetching orders");
        self.execute(RequestSpec::get(endpoints::ORDERS)).await
    }

    /// Place an order against a portfolio.
    #[instrument(skip(self))]
    pub async fn place_order(&self, order: &Order) -> Result<OrderCreated> {
        debug!(side = %order.order_type, amount = order.amount, "placing order");
        self.execute(RequestSpec::post(endpoints::ORDERS, order)?)
            .await
    }

    /// Fetch the news feed for a comma-separated ticker list.
    #[instrument(skip(self))]
    pub async fn news(&self, tickers: &str, kind: NewsKind) -> Result<Vec<NewsArticle>> {
        debug!("fetching news");
        let spec = RequestSpec::get(endpoints::YAHOO_NEWS)
            .query("tickers", tickers)
            .query("type", kind.as_str());
        let response: NewsResponse = self.execute(spec).await?;
        Ok(response.body)
    }

    /// Request an AI forecast for a symbol.
    ///
    /// The forecast shape is owned by the remote model; it is returned as
    /// opaque JSON.
    #[instrument(skip(self))]
    pub async fn predict(&self, symbol: &Symbol) -> Result<serde_json::Value> {
        debug!("requesting forecast");
        let body = PredictRequest {
            symbol: symbol.as_str(),
        };
        self.execute(RequestSpec::post(endpoints::PREDICT, &body)?)
            .await
    }

    /// Fetch the AI trade rating for a symbol.
    #[instrument(skip(self))]
    pub async fn trade_rating(&self, symbol: &Symbol) -> Result<f64> {
        debug!("fetching trade rating");
        let spec = RequestSpec::get(endpoints::TRADE_RATING).query("symbol", symbol.as_str());
        let response: TradeRatingResponse = self.execute(spec).await?;
        Ok(response.trade_rating)
    }

    /// Send a message to the AI chat endpoint.
    #[instrument(skip(self, message))]
    pub async fn chat(&self, message: &str) -> Result<String> {
        debug!("sending chat message");
        let body = ChatRequest { message };
        let response: ChatResponse = self
            .execute(RequestSpec::post(endpoints::CHAT, &body)?)
            .await?;
        Ok(response.reply)
    }

    /// Fetch the current market quote for a symbol.
    #[instrument(skip(self))]
    pub async fn stock_quote(&self, symbol: &Symbol) -> Result<Quote> {
        debug!("fetching quote");
        let spec = RequestSpec::get(endpoints::STOCK_DATA).query("symbol", symbol.as_str());
        self.execute(spec).await
    }

    /// List support requests.
    #[instrument(skip(self))]
    pub async fn support_requests(&self) -> Result<Vec<SupportRequest>> {
        debug!("fetching support requests");
        self.execute(RequestSpec::get(endpoints::SUPPORT_REQUESTS))
            .await
    }

    /// File a new support request.
    #[instrument(skip(self, request))]
    pub async fn create_support_request(&self, request: &str) -> Result<SupportRequestCreated> {
        debug!("filing support request");
        let body = SupportRequestCreate {
            request,
            user_id: None,
        };
        self.execute(RequestSpec::post(endpoints::SUPPORT_REQUESTS, &body)?)
            .await
    }

    /// Fetch the dashboard metrics for a fund manager.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, username: &str) -> Result<DashboardSummary> {
        debug!("fetching dashboard");
        self.execute(RequestSpec::get(endpoints::dashboard_path(username)))
            .await
    }
}
