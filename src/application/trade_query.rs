//! Trade query: fetches routes for intents, caches the latest result and
//! memoises projections.
//!
//! Delivery ordering is "latest key wins": every fetch takes a generation
//! number when it is issued, and a response is applied only if no newer fetch
//! was issued in the meantime. Superseded responses (and errors) are dropped.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::price::PriceTable;
use crate::domain::trade::{
    project, projection_key, ProjectionKey, QuoteRequest, RawRouteResult, TradeIntent, TradeKey,
    TradeProjection,
};
use crate::infrastructure::api_clients::QuoteApiClient;
use crate::shared::errors::QuoteError;

/// Result of a single fetch
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Intent not ready; nothing was requested
    Disabled,
    /// Response applied to the cache
    Fresh(Arc<RawRouteResult>),
    /// A newer fetch was issued before this one finished; response discarded
    Superseded,
}

/// Cached route for an intent
#[derive(Debug, Clone)]
pub struct QueryData {
    pub result: Arc<RawRouteResult>,
    /// Set when the result belongs to an earlier key of the same token pair
    pub is_previous: bool,
}

#[derive(Debug)]
struct CachedResult {
    key: TradeKey,
    id: u64,
    result: Arc<RawRouteResult>,
}

#[derive(Debug)]
struct CachedProjection {
    key: ProjectionKey,
    result_id: Option<u64>,
    projection: Arc<TradeProjection>,
}

#[derive(Debug, Default)]
struct QueryState {
    latest_generation: u64,
    next_result_id: u64,
    last_result: Option<CachedResult>,
    projection: Option<CachedProjection>,
}

pub struct TradeQuery {
    client: Arc<dyn QuoteApiClient>,
    state: RwLock<QueryState>,
}

impl TradeQuery {
    pub fn new(client: Arc<dyn QuoteApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(QueryState::default()),
        }
    }

    /// Fetch the route for `intent`, applying it only if it is still the latest request
    pub async fn fetch(&self, intent: &TradeIntent) -> Result<FetchOutcome, QuoteError> {
        let generation = {
            let mut state = self.state.write().await;
            state.latest_generation += 1;
            state.latest_generation
        };

        let Some(request) = QuoteRequest::from_intent(intent)? else {
            debug!("Trade intent not ready, skipping quote request");
            return Ok(FetchOutcome::Disabled);
        };

        let response = self.client.get_route(&request).await;

        let mut state = self.state.write().await;
        if state.latest_generation != generation {
            debug!(
                "Discarding superseded route {} -> {} (generation {} < {})",
                request.from_token_id, request.to_token_id, generation, state.latest_generation
            );
            return Ok(FetchOutcome::Superseded);
        }

        let result = Arc::new(response?);
        state.next_result_id += 1;
        let id = state.next_result_id;
        state.last_result = Some(CachedResult {
            key: intent.query_key(),
            id,
            result: Arc::clone(&result),
        });
        Ok(FetchOutcome::Fresh(result))
    }

    /// Cached route for `intent`.
    ///
    /// Falls back to the previous key's result only within the same chain and
    /// token pair; a different pair never sees another pair's route.
    pub async fn data(&self, intent: &TradeIntent) -> Option<QueryData> {
        let state = self.state.read().await;
        Self::lookup(&state, intent).map(|(_, data)| data)
    }

    fn lookup(state: &QueryState, intent: &TradeIntent) -> Option<(u64, QueryData)> {
        if !intent.is_ready() {
            return None;
        }
        let cached = state.last_result.as_ref()?;
        let key = intent.query_key();
        let is_previous = if cached.key == key {
            false
        } else if cached.key.same_pair(&key) {
            true
        } else {
            return None;
        };
        Some((
            cached.id,
            QueryData {
                result: Arc::clone(&cached.result),
                is_previous,
            },
        ))
    }

    /// Projection of the cached route for `intent`, recomputed whenever the
    /// intent, the price table, or the underlying result changes
    pub async fn trade(&self, intent: &TradeIntent, prices: Option<&PriceTable>) -> Arc<TradeProjection> {
        let key = projection_key(intent, prices);

        let mut state = self.state.write().await;
        let found = Self::lookup(&state, intent);
        let result_id = found.as_ref().map(|(id, _)| *id);

        if let Some(cached) = &state.projection {
            if cached.key == key && cached.result_id == result_id {
                return Arc::clone(&cached.projection);
            }
        }

        let raw = found.map(|(_, data)| data.result);
        let projection = Arc::new(project(raw.as_deref(), intent, prices));
        state.projection = Some(CachedProjection {
            key,
            result_id,
            projection: Arc::clone(&projection),
        });
        projection
    }
}
