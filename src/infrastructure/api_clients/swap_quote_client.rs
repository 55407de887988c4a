use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::trade::{QuoteRequest, RawRouteResult};
use crate::shared::errors::QuoteError;
use super::QuoteApiClient;

pub const DEFAULT_SWAP_API_URL: &str = "https://swap.sushi.com";

/// Route-quoting service client
pub struct SwapQuoteApiClient {
    http_client: Client,
    base_url: String,
}

impl SwapQuoteApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QuoteApiClient for SwapQuoteApiClient {
    async fn get_route(&self, request: &QuoteRequest) -> Result<RawRouteResult, QuoteError> {
        let url = format!("{}/v0", self.base_url);
        debug!("Fetching route from {} with {:?}", url, request.query_pairs());

        let response = self
            .http_client
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Quote request failed with status: {}", response.status());
            return Err(QuoteError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let result = RawRouteResult::from_slice(&body)?;

        info!(
            "Route {} -> {} on chain {}: in={} out={} hops={}",
            request.from_token_id,
            request.to_token_id,
            request.chain_id,
            result.best_route.amount_in_bn,
            result.best_route.amount_out_bn,
            result.current_route_human_array.len()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::ChainRegistry;
    use crate::domain::trade::TradeIntent;
    use crate::shared::types::Token;
    use num_bigint::BigInt;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> QuoteRequest {
        let eth = ChainRegistry::native_currency(1).unwrap().token();
        let usdc = Token::new(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6, None).unwrap();
        let intent = TradeIntent::new(1, eth, usdc, Some(BigInt::from(1_000_000u32)));
        QuoteRequest::from_intent(&intent).unwrap().unwrap()
    }

    fn client(server: &MockServer) -> SwapQuoteApiClient {
        SwapQuoteApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_route_encodes_query_and_parses_body() {
        let mock_server = MockServer::start().await;

        let response = json!({
            "getBestRoute": {
                "amountInBN": "1000000",
                "amountOutBN": "512",
                "priceImpact": 0.01,
                "gasSpent": 90000
            },
            "getCurrentRouteHumanArray": ["ETH -> USDC"],
            "getCurrentRouteRPParams": null
        });

        Mock::given(method("GET"))
            .and(path("/v0"))
            .and(query_param("chainId", "1"))
            .and(query_param("fromTokenId", "ETH"))
            .and(query_param("toTokenId", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"))
            .and(query_param("amount", "1000000"))
            .and(query_param("gasPrice", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client(&mock_server).get_route(&request()).await.unwrap();
        assert_eq!(result.best_route.amount_out_bn, BigInt::from(512));
        assert!(result.current_route_rp_params.is_none());
    }

    #[tokio::test]
    async fn test_get_route_reports_schema_mismatch_as_validation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server).get_route(&request()).await.unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_route_reports_http_failure_as_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v0"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server).get_route(&request()).await.unwrap_err();
        assert!(matches!(err, QuoteError::Status(502)));
    }

    #[tokio::test]
    async fn test_get_route_reports_unreachable_service_as_network() {
        let client = SwapQuoteApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.get_route(&request()).await.unwrap_err();
        assert!(matches!(err, QuoteError::Network(_)));
    }
}
