use serde::{Deserialize, Serialize};

/// Wire envelope: `{ "data": { "userHolding": [...] } }`.
///
/// Every level is optional. A missing level means "no holdings", never a
/// decode error; only malformed JSON at the top level is an error.
#[derive(Debug, Default, Deserialize)]
pub struct HoldingsResponse {
    pub data: Option<HoldingsData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HoldingsData {
    #[serde(rename = "userHolding")]
    pub user_holding: Option<Vec<Holding>>,
}

impl HoldingsResponse {
    pub fn into_holdings(self) -> Vec<Holding> {
        self.data.and_then(|d| d.user_holding).unwrap_or_default()
    }
}

/// One portfolio position. Upstream records can be partial, so every field
/// is optional; absent numerics count as 0 in all derived arithmetic.
///
/// The serialized form keeps the wire field names, which makes the cache file
/// directly interchangeable with the remote list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Holding {
    pub symbol: Option<String>,
    pub quantity: Option<f64>,
    pub ltp: Option<f64>,
    #[serde(rename = "avgPrice")]
    pub avg_price: Option<f64>,
    pub close: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_envelope_decodes() {
        let body = r#"{
            "data": {
                "userHolding": [
                    {"symbol": "SBIN", "quantity": 4, "ltp": 550.05, "avgPrice": 501.2, "close": 590}
                ]
            }
        }"#;
        let response: HoldingsResponse = serde_json::from_str(body).unwrap();
        let holdings = response.into_holdings();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].symbol.as_deref(), Some("SBIN"));
        assert_eq!(holdings[0].avg_price, Some(501.2));
    }

    #[test]
    fn missing_nesting_collapses_to_empty() {
        for body in ["{}", r#"{"data": null}"#, r#"{"data": {}}"#, r#"{"data": {"userHolding": null}}"#] {
            let response: HoldingsResponse = serde_json::from_str(body).unwrap();
            assert!(response.into_holdings().is_empty(), "body: {body}");
        }
    }

    #[test]
    fn partial_record_decodes_with_absent_fields() {
        let body = r#"{"data": {"userHolding": [{"symbol": "ITC"}]}}"#;
        let response: HoldingsResponse = serde_json::from_str(body).unwrap();
        let holdings = response.into_holdings();
        assert_eq!(holdings[0].symbol.as_deref(), Some("ITC"));
        assert_eq!(holdings[0].quantity, None);
        assert_eq!(holdings[0].ltp, None);
    }

    #[test]
    fn cache_round_trip_keeps_wire_names() {
        let holding = Holding {
            symbol: Some("TCS".to_string()),
            quantity: Some(2.0),
            ltp: Some(3250.5),
            avg_price: Some(3111.0),
            close: Some(3312.0),
        };
        let json = serde_json::to_string(&[holding.clone()]).unwrap();
        assert!(json.contains("avgPrice"));
        let back: Vec<Holding> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![holding]);
    }
}
