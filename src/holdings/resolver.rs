use tracing::{debug, warn};

use crate::core::FetchError;
use crate::holdings::bundle::BundleSource;
use crate::holdings::client::RemoteSource;
use crate::holdings::store::HoldingStore;
use crate::holdings::types::{Holding, HoldingsResponse};

/// Orchestrates the three resolution tiers: remote endpoint, on-disk cache,
/// bundled seed.
pub struct HoldingsResolver<R, S, B> {
    remote: R,
    store: S,
    bundle: B,
}

impl<R, S, B> HoldingsResolver<R, S, B>
where
    R: RemoteSource,
    S: HoldingStore,
    B: BundleSource,
{
    pub fn new(remote: R, store: S, bundle: B) -> Self {
        Self {
            remote,
            store,
            bundle,
        }
    }

    /// Resolve one authoritative holdings list.
    ///
    /// A successful remote response is final, even when empty; its list is
    /// written through to the cache when non-empty. Fallback tiers run only
    /// after a transport or decode failure, and a tier that errors or holds
    /// nothing is skipped silently. When every tier comes up empty, the
    /// original remote error propagates unchanged.
    pub async fn fetch_holdings(&self) -> Result<Vec<Holding>, FetchError> {
        let remote_err = match self.fetch_remote().await {
            Ok(holdings) => {
                self.write_through(&holdings).await;
                return Ok(holdings);
            }
            Err(e) => e,
        };

        match self.store.load().await {
            Ok(cached) if !cached.is_empty() => {
                warn!(
                    error = %remote_err,
                    count = cached.len(),
                    "remote fetch failed, serving cached holdings"
                );
                return Ok(cached);
            }
            Ok(_) => debug!("holdings cache empty"),
            Err(e) => warn!(error = %e, "holdings cache unreadable"),
        }

        if let Some(seeded) = self.bundled_holdings() {
            warn!(
                error = %remote_err,
                count = seeded.len(),
                "remote fetch failed, serving bundled holdings"
            );
            return Ok(seeded);
        }

        Err(remote_err)
    }

    async fn fetch_remote(&self) -> Result<Vec<Holding>, FetchError> {
        let body = self.remote.fetch_body().await?;
        let response: HoldingsResponse = serde_json::from_str(&body)?;
        Ok(response.into_holdings())
    }

    /// Cache population is opportunistic: an empty list is not cached, and a
    /// failed save never fails the fetch that triggered it.
    async fn write_through(&self, holdings: &[Holding]) {
        if holdings.is_empty() {
            return;
        }
        if let Err(e) = self.store.save(holdings).await {
            warn!(error = %e, "holdings cache save failed");
        }
    }

    fn bundled_holdings(&self) -> Option<Vec<Holding>> {
        let raw = self.bundle.bundled_json()?;
        match serde_json::from_str::<HoldingsResponse>(raw) {
            Ok(response) => {
                let holdings = response.into_holdings();
                if holdings.is_empty() {
                    None
                } else {
                    Some(holdings)
                }
            }
            Err(e) => {
                warn!(error = %e, "bundled holdings did not decode");
                None
            }
        }
    }
}
