//! Rate acquisition: the source abstraction, the published snapshot and the
//! provider that ties them together.

use super::error::RateError;
use super::quote::QuoteName;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// A remote service able to quote the sell price of one dollar in pesos.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_sell_price(&self, quote: QuoteName) -> Result<f64>;
}

/// Sell prices for every quote, fetched together.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateSnapshot {
    blue: f64,
    official: f64,
    mep: f64,
}

impl RateSnapshot {
    pub fn get(&self, quote: QuoteName) -> f64 {
        match quote {
            QuoteName::Blue => self.blue,
            QuoteName::Official => self.official,
            QuoteName::Mep => self.mep,
        }
    }

    /// True until a fetch has completed successfully.
    pub fn is_empty(&self) -> bool {
        QuoteName::ALL.iter().all(|q| self.get(*q) == 0.0)
    }

    fn slot(&mut self, quote: QuoteName) -> &mut f64 {
        match quote {
            QuoteName::Blue => &mut self.blue,
            QuoteName::Official => &mut self.official,
            QuoteName::Mep => &mut self.mep,
        }
    }
}

impl FromIterator<(QuoteName, f64)> for RateSnapshot {
    fn from_iter<I: IntoIterator<Item = (QuoteName, f64)>>(iter: I) -> Self {
        let mut snapshot = RateSnapshot::default();
        for (quote, price) in iter {
            *snapshot.slot(quote) = price;
        }
        snapshot
    }
}

/// Holds the latest complete snapshot and refreshes it from a [`RateSource`].
pub struct RateProvider {
    source: Arc<dyn RateSource>,
    current: RwLock<RateSnapshot>,
}

impl RateProvider {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            source,
            current: RwLock::new(RateSnapshot::default()),
        }
    }

    /// Latest published snapshot, zero everywhere if none was fetched yet.
    pub fn snapshot(&self) -> RateSnapshot {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches all quotes concurrently and publishes them as one snapshot.
    ///
    /// Every request runs to completion. If any of them fails the stored
    /// snapshot is left as it was and the first failure is returned.
    pub async fn fetch_rates(&self) -> Result<RateSnapshot, RateError> {
        let fetches = QuoteName::ALL.map(|quote| {
            let source = Arc::clone(&self.source);
            async move {
                let price = source
                    .fetch_sell_price(quote)
                    .await
                    .and_then(validate_price)
                    .map_err(|reason| RateError::FetchFailure { quote, reason })?;
                debug!(%quote, price, "Fetched quote");
                Ok::<_, RateError>((quote, price))
            }
        });

        let prices = join_all(fetches)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let snapshot: RateSnapshot = prices.into_iter().collect();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        info!(?snapshot, "Published new rate snapshot");
        Ok(snapshot)
    }

    /// Single fetch attempt whose failure is only logged.
    pub async fn refresh(&self) -> bool {
        match self.fetch_rates().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Failed to fetch exchange rates");
                false
            }
        }
    }
}

fn validate_price(price: f64) -> Result<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(anyhow!("Invalid sell price: {}", price))
    }
}
