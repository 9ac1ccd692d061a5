//! Portfolio view-state: the current holdings list and the metrics derived
//! from it, kept coupled so observers never see one without the other.

use tracing::warn;

use crate::holdings::bundle::BundleSource;
use crate::holdings::client::RemoteSource;
use crate::holdings::resolver::HoldingsResolver;
use crate::holdings::store::HoldingStore;
use crate::holdings::types::Holding;

/// Aggregate metrics for one holdings list.
///
/// All four values always derive from the same list; `compute` is the only
/// way to build a non-default snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSnapshot {
    pub current_value: f64,
    pub total_investment: f64,
    pub total_pnl: f64,
    pub todays_pnl: f64,
}

impl PortfolioSnapshot {
    fn compute(holdings: &[Holding]) -> Self {
        let current_value: f64 = holdings
            .iter()
            .map(|h| h.ltp.unwrap_or(0.0) * h.quantity.unwrap_or(0.0))
            .sum();
        let total_investment: f64 = holdings
            .iter()
            .map(|h| h.avg_price.unwrap_or(0.0) * h.quantity.unwrap_or(0.0))
            .sum();
        let todays_pnl: f64 = holdings
            .iter()
            .map(|h| (h.close.unwrap_or(0.0) - h.ltp.unwrap_or(0.0)) * h.quantity.unwrap_or(0.0))
            .sum();

        Self {
            current_value,
            total_investment,
            total_pnl: current_value - total_investment,
            todays_pnl,
        }
    }
}

type UpdateFn = Box<dyn FnMut() + Send>;

/// What the presentation layer renders. One subscriber may register for
/// change notifications; every state transition fires it exactly once, after
/// the state is fully consistent.
#[derive(Default)]
pub struct PortfolioView {
    holdings: Vec<Holding>,
    snapshot: PortfolioSnapshot,
    is_expanded: bool,
    is_loading: bool,
    error_message: Option<String>,
    on_update: Option<UpdateFn>,
}

impl PortfolioView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the change-notification subscriber. Single-subscriber: a
    /// later registration replaces an earlier one.
    pub fn on_update(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_update = Some(Box::new(callback));
    }

    /// Replace the holdings wholesale. Metrics are recomputed from the new
    /// list before the subscriber hears about the change.
    pub fn set_holdings(&mut self, holdings: Vec<Holding>) {
        self.holdings = holdings;
        self.snapshot = PortfolioSnapshot::compute(&self.holdings);
        self.notify();
    }

    /// Unrealized P&L for a single position.
    pub fn pnl(&self, holding: &Holding) -> f64 {
        (holding.ltp.unwrap_or(0.0) - holding.avg_price.unwrap_or(0.0))
            * holding.quantity.unwrap_or(0.0)
    }

    /// Display-only flag; metrics are untouched.
    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
        self.notify();
    }

    /// Drive one refresh through the resolver.
    ///
    /// A failed refresh keeps whatever is already on screen: the error
    /// message is set only when there are no holdings to show, otherwise the
    /// failure is logged and the stale list stays visible.
    pub async fn refresh<R, S, B>(&mut self, resolver: &HoldingsResolver<R, S, B>)
    where
        R: RemoteSource,
        S: HoldingStore,
        B: BundleSource,
    {
        self.is_loading = true;
        self.error_message = None;
        self.notify();

        match resolver.fetch_holdings().await {
            Ok(holdings) => {
                self.is_loading = false;
                self.set_holdings(holdings);
            }
            Err(e) => {
                self.is_loading = false;
                if self.holdings.is_empty() {
                    self.error_message = Some(e.user_message().to_string());
                }
                warn!(error = %e, "holdings refresh failed");
                self.notify();
            }
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        self.snapshot
    }

    pub fn current_value(&self) -> f64 {
        self.snapshot.current_value
    }

    pub fn total_investment(&self) -> f64 {
        self.snapshot.total_investment
    }

    pub fn total_pnl(&self) -> f64 {
        self.snapshot.total_pnl
    }

    pub fn todays_pnl(&self) -> f64 {
        self.snapshot.todays_pnl
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn notify(&mut self) {
        if let Some(cb) = self.on_update.as_mut() {
            cb();
        }
    }
}
