use serde::{Deserialize, Serialize};
use serde_json::Value;

// POST /suggest-account
//
// Both fields stay loosely typed: a missing or non-string summary is an empty
// result, and a `top_k` that is not a usable count falls back to the default.
// Neither rejects the request.
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub top_k: Option<Value>,
}

impl SuggestParams {
    pub fn summary_text(&self) -> Option<&str> {
        match &self.summary {
            Some(Value::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// `top_k` as a match count. Integral numbers (`2`, `2.0`) and numeric
    /// strings (`"2"`) count; negatives, fractions and anything else do not.
    pub fn match_count(&self) -> Option<u32> {
        let count = match self.top_k.as_ref()? {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        let count = count.and_then(|c| u32::try_from(c).ok());
        if count.is_none() {
            tracing::debug!(top_k = ?self.top_k, "Ignoring unusable top_k");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn match_count(top_k: Value) -> Option<u32> {
        let params: SuggestParams =
            serde_json::from_value(json!({ "summary": "ボールペン", "top_k": top_k })).unwrap();
        params.match_count()
    }

    #[test]
    fn integral_counts_are_accepted_in_any_numeric_form() {
        assert_eq!(match_count(json!(2)), Some(2));
        assert_eq!(match_count(json!(2.0)), Some(2));
        assert_eq!(match_count(json!("2")), Some(2));
    }

    #[test]
    fn unusable_counts_fall_back() {
        assert_eq!(match_count(json!(null)), None);
        assert_eq!(match_count(json!(-1)), None);
        assert_eq!(match_count(json!(2.5)), None);
        assert_eq!(match_count(json!("many")), None);
        assert_eq!(match_count(json!([3])), None);
        assert_eq!(match_count(json!(u64::MAX)), None);
    }
}

// POST /admin/backfill
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackfillRequest {
    #[serde(default)]
    pub batch: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BackfillResponse {
    pub status: u16,
    pub data: Value,
}

// Health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
