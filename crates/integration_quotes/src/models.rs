//! Quote data models

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// TianAPI endpoint serving short texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteEndpoint {
    /// Love sayings (`/saylove/index`)
    SayLove,
    /// Compliments (`/caihongpi/index`)
    CaiHongPi,
}

impl QuoteEndpoint {
    /// Every endpoint, in selection order
    pub const ALL: [Self; 2] = [Self::SayLove, Self::CaiHongPi];

    /// Pick one endpoint uniformly at random
    #[must_use]
    pub fn random() -> Self {
        Self::ALL
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(Self::SayLove)
    }

    /// Path relative to the API base URL
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::SayLove => "/saylove/index",
            Self::CaiHongPi => "/caihongpi/index",
        }
    }
}

/// Raw API response envelope
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub result: Option<ApiResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResult {
    #[serde(default)]
    pub content: Option<String>,
}

impl ApiResponse {
    /// Extract the text, if the response carries one
    pub(crate) fn into_content(self) -> Option<String> {
        self.result.and_then(|result| result.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(QuoteEndpoint::SayLove.path(), "/saylove/index");
        assert_eq!(QuoteEndpoint::CaiHongPi.path(), "/caihongpi/index");
    }

    #[test]
    fn random_endpoint_covers_both() {
        let picks: std::collections::HashSet<_> = (0..200).map(|_| QuoteEndpoint::random()).collect();
        assert_eq!(picks.len(), 2);
    }

    #[test]
    fn parse_success() {
        let json = r#"{"code": 200, "msg": "success", "result": {"content": " 你是我的小确幸 "}}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.into_content().as_deref(), Some(" 你是我的小确幸 "));
    }

    #[test]
    fn parse_without_result() {
        let json = r#"{"code": 150, "msg": "API可用次数不足"}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.msg, "API可用次数不足");
        assert!(response.into_content().is_none());
    }
}
