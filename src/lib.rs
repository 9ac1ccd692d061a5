//! Portfolio holdings with a three-tier resolution pipeline: remote endpoint
//! first, then the on-disk cache, then bundled seed data. A view-state layer
//! derives aggregate metrics (current value, investment, P&L) from whichever
//! list the pipeline produced.

pub mod core;
pub mod holdings;
pub mod portfolio;
