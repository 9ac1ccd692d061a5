/// Packaged seed data, the last fallback tier.
pub trait BundleSource: Send + Sync {
    /// Raw JSON in the remote envelope schema, or `None` when the resource
    /// is unavailable.
    fn bundled_json(&self) -> Option<&str>;
}

const HOLDINGS_FALLBACK: &str = include_str!("../../assets/holdings_fallback.json");

/// The seed file compiled into the binary.
pub struct EmbeddedBundle;

impl BundleSource for EmbeddedBundle {
    fn bundled_json(&self) -> Option<&str> {
        Some(HOLDINGS_FALLBACK)
    }
}
