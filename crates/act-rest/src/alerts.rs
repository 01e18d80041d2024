//! Price alert evaluation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use act_core::Result;
use act_core::models::PriceAlert;
use act_core::store::AlertStore;

use crate::session::Session;

/// Default polling period between alert sweeps.
const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(3600);

/// A price alert whose threshold was crossed, with the price that fired it.
#[derive(Debug, Clone)]
pub struct TriggeredAlert {
    pub alert: PriceAlert,
    pub price: f64,
}

/// Evaluates stored price alerts against live quotes.
///
/// Alert definitions live in the durable [`AlertStore`] and are re-read on
/// every sweep, so alerts added or removed elsewhere take effect on the next
/// tick.
pub struct AlertMonitor {
    session: Session,
    store: Arc<dyn AlertStore>,
    period: Duration,
}

impl AlertMonitor {
    /// Create a monitor with the default hourly polling period.
    pub fn new(session: Session, store: Arc<dyn AlertStore>) -> Self {
        Self {
            session,
            store,
            period: DEFAULT_POLL_PERIOD,
        }
    }

    /// Override the polling period.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Run a single sweep: fetch one quote per distinct symbol and return
    /// the alerts whose threshold is crossed.
    ///
    /// A quote that cannot be fetched skips its alerts for this sweep rather
    /// than failing the whole pass.
    #[instrument(skip(self))]
    pub async fn check(&self) -> Result<Vec<TriggeredAlert>> {
        let alerts = self.store.alerts().await?;
        debug!(count = alerts.len(), "evaluating alerts");

        let mut quotes: HashMap<String, f64> = HashMap::new();
        let mut triggered = Vec::new();

        for alert in alerts {
            let price = match quotes.get(alert.symbol.as_str()) {
                Some(price) => *price,
                None => match self.session.stock_quote(&alert.symbol).await {
                    Ok(quote) => {
                        quotes.insert(alert.symbol.as_str().to_string(), quote.current);
                        quote.current
                    }
                    Err(e) => {
                        warn!(symbol = %alert.symbol, error = %e, "failed to fetch quote");
                        continue;
                    }
                },
            };

            if alert.is_triggered(price) {
                info!(symbol = %alert.symbol, price, threshold = alert.threshold, "alert triggered");
                triggered.push(TriggeredAlert { alert, price });
            }
        }

        Ok(triggered)
    }

    /// Poll forever, invoking the callback for each triggered alert.
    ///
    /// A failed sweep is logged and the loop keeps going; the next tick
    /// re-reads the store and tries again.
    pub async fn run(&self, mut on_trigger: impl FnMut(&TriggeredAlert)) {
        let mut interval = tokio::time::interval(self.period);
        loop {
            interval.tick().await;
            match self.check().await {
                Ok(triggered) => {
                    for alert in &triggered {
                        on_trigger(alert);
                    }
                }
                Err(e) => warn!(error = %e, "alert sweep failed"),
            }
        }
    }
}
