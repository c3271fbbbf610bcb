#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use matchday_football_data::{
    FootballDataConfig, FootballDataService, FootballTransport, RateLimiter, TransportError,
};
use serde_json::{json, Value};
use tokio::time::Instant;

/// Transport returning canned responses per endpoint and recording calls.
///
/// Endpoints without a canned response answer 404.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Result<Value, TransportError>>>,
    calls: Mutex<Vec<(String, Instant)>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, endpoint: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Ok(body));
    }

    pub fn fail(&self, endpoint: &str, error: TransportError) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Err(error));
    }

    pub fn fail_status(&self, endpoint: &str, status: u16) {
        self.fail(
            endpoint,
            TransportError::Status {
                status,
                message: String::new(),
            },
        );
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(endpoint, _)| endpoint.clone())
            .collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl FootballTransport for MockTransport {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn fetch(&self, endpoint: &str, _timeout: Duration) -> Result<Value, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), Instant::now()));

        self.responses
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or(Err(TransportError::Status {
                status: 404,
                message: "Not Found".to_string(),
            }))
    }
}

pub fn service_with(transport: Arc<MockTransport>) -> FootballDataService {
    service_with_config(transport, &FootballDataConfig::default())
}

pub fn service_with_config(
    transport: Arc<MockTransport>,
    config: &FootballDataConfig,
) -> FootballDataService {
    FootballDataService::new(
        transport,
        Arc::new(RateLimiter::new()),
        config,
    )
}

pub fn raw_match(id: i64, status: &str, home: (i64, &str), away: (i64, &str), score: (Value, Value)) -> Value {
    json!({
        "id": id,
        "status": status,
        "utcDate": format!("2023-09-{:02}T15:00:00Z", (id % 28) + 1),
        "homeTeam": {"id": home.0, "name": home.1},
        "awayTeam": {"id": away.0, "name": away.1},
        "score": {"fullTime": {"home": score.0, "away": score.1}},
        "competition": {"name": "Premier League"}
    })
}
