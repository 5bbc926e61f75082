//! The application store: the sidebar flag and the state of the dashboard's
//! asynchronous actions.
//!
//! The store is a plain struct with synchronous transitions. The async
//! actions at the bottom of this file drive it through a [`StoreCell`], which
//! is a Dioxus `Signal` in the app and a `RefCell` in tests.
//!
//! All three actions share `loading` and `error`. Each one takes a
//! [`RequestToken`] when it starts and may only commit while that token is
//! still the newest; results of superseded requests are dropped.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::exchange_rates::CurrencyRate;
use api::rate_providers::RatesProvider;
use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::compat;

const FETCH_MESSAGE: &str = "Data fetched successfully!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The payload handed to `save_data` is not a structured value.
    #[error("{0}")]
    Validation(String),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Unknown(String),
}

impl From<ApiError> for StoreError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Http { status } => Self::Http { status },
            ApiError::Network(msg) => Self::Network(msg),
            ApiError::Decode(msg) => Self::Unknown(msg),
        }
    }
}

/// Identifies one started request. Only the newest token may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppStore {
    sidebar_open: bool,
    loading: bool,
    error: Option<String>,
    data: Option<Value>,
    currencies: Vec<CurrencyRate>,
    generation: u64,
}

impl AppStore {
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn currencies(&self) -> &[CurrencyRate] {
        &self.currencies
    }

    /// Marks a new request as the current one: sets `loading`, clears
    /// `error` and supersedes every request started before it.
    pub fn begin_request(&mut self) -> RequestToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.generation)
    }

    /// Finishes the request identified by `token`.
    ///
    /// If a newer request was started (or the store was reset) in the
    /// meantime, nothing is written and `false` is returned. Otherwise
    /// `loading` is cleared and either `apply` receives the value or the
    /// error message is recorded. A recorded error leaves earlier data alone.
    pub fn commit<T>(
        &mut self,
        token: RequestToken,
        result: Result<T, StoreError>,
        apply: impl FnOnce(&mut Self, T),
    ) -> bool {
        if token.0 != self.generation {
            debug!("dropping result of superseded request {:?}", token);
            return false;
        }
        self.loading = false;
        match result {
            Ok(value) => apply(self, value),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Clears data, currencies, error and loading, and supersedes any
    /// request still in flight.
    pub fn reset_data(&mut self) {
        self.generation += 1;
        self.data = None;
        self.currencies.clear();
        self.error = None;
        self.loading = false;
    }
}

/// Shared, mutable access to an [`AppStore`] from async code.
///
/// Each call borrows the store only for the duration of `f`, never across an
/// await point.
pub trait StoreCell {
    fn with_store<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R;
}

impl StoreCell for Signal<AppStore> {
    fn with_store<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        let mut signal = *self;
        let mut store = signal.write();
        f(&mut store)
    }
}

impl StoreCell for Rc<RefCell<AppStore>> {
    fn with_store<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Simulated fetch: waits `delay`, then stores a fixed message with the
/// current timestamp.
pub async fn fetch_data(cell: &impl StoreCell, delay: Duration) {
    let token = cell.with_store(AppStore::begin_request);

    compat::sleep(delay).await;
    let payload = json!({ "message": FETCH_MESSAGE, "timestamp": now_millis() });

    cell.with_store(|store| store.commit(token, Ok(payload), |s, v| s.data = Some(v)));
}

/// Object fields of a structured payload. Arrays spread into index keys.
fn payload_fields(payload: Value) -> Result<Map<String, Value>, StoreError> {
    match payload {
        Value::Object(fields) => Ok(fields),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect()),
        _ => Err(StoreError::Validation("Invalid payload".to_string())),
    }
}

/// Simulated save: validates `payload`, waits `delay`, then stores it with
/// `saved: true` and a timestamp added.
///
/// A payload that is not an object or array fails immediately, without
/// waiting and without touching `data`. Failures are both recorded in the
/// store and returned.
pub async fn save_data(cell: &impl StoreCell, payload: Value, delay: Duration) -> Result<(), StoreError> {
    let token = cell.with_store(AppStore::begin_request);

    let result = match payload_fields(payload) {
        Ok(mut fields) => {
            compat::sleep(delay).await;
            fields.insert("saved".to_string(), Value::Bool(true));
            fields.insert("timestamp".to_string(), now_millis().into());
            Ok(Value::Object(fields))
        }
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        error!("save failed: {}", e);
    }
    let returned = result.as_ref().map(|_| ()).map_err(|e| e.clone());
    cell.with_store(|store| store.commit(token, result, |s, v| s.data = Some(v)));
    returned
}

/// Loads the first `limit` exchange rates from `provider`.
///
/// Failures are recorded in the store (and logged) but not returned.
pub async fn fetch_currencies(cell: &impl StoreCell, provider: &impl RatesProvider, limit: usize) {
    let token = cell.with_store(AppStore::begin_request);

    let result = provider.get_rates(limit).await.map_err(StoreError::from);
    match &result {
        Ok(rates) => debug!("fetched {} exchange rates", rates.len()),
        Err(e) => error!("Currency fetch error: {}", e),
    }

    cell.with_store(|store| store.commit(token, result, |s, rates| s.currencies = rates));
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::exchange_rates::first_table_rates;
    use std::pin::pin;

    const DELAY: Duration = Duration::from_millis(1500);

    fn new_cell() -> Rc<RefCell<AppStore>> {
        Rc::new(RefCell::new(AppStore::default()))
    }

    /// Serves a canned response body through the real extraction logic.
    struct StaticBody(Value);

    impl RatesProvider for StaticBody {
        async fn get_rates(&self, limit: usize) -> Result<Vec<CurrencyRate>, ApiError> {
            Ok(first_table_rates(&self.0, limit))
        }
    }

    struct Failing(ApiError);

    impl RatesProvider for Failing {
        async fn get_rates(&self, _limit: usize) -> Result<Vec<CurrencyRate>, ApiError> {
            Err(self.0.clone())
        }
    }

    fn nbp_body(count: usize) -> Value {
        let rates: Vec<Value> = (0..count)
            .map(|i| json!({ "currency": format!("currency {i}"), "code": format!("C{i:02}"), "mid": 1.0 + i as f64 }))
            .collect();
        json!([{ "table": "A", "no": "001/A/NBP/2025", "effectiveDate": "2025-01-01", "rates": rates }])
    }

    #[test]
    fn sidebar_starts_closed_and_toggles() {
        let mut store = AppStore::default();
        assert!(!store.is_sidebar_open());
        store.toggle_sidebar();
        assert!(store.is_sidebar_open());
        store.toggle_sidebar();
        assert!(!store.is_sidebar_open());
        store.open_sidebar();
        store.open_sidebar();
        assert!(store.is_sidebar_open());
        store.close_sidebar();
        assert!(!store.is_sidebar_open());
    }

    #[test]
    fn initial_async_state_is_empty() {
        let store = AppStore::default();
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.data(), None);
        assert!(store.currencies().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_data_stores_message() {
        let cell = new_cell();
        fetch_data(&cell, DELAY).await;

        let store = cell.borrow();
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        let data = store.data().unwrap();
        assert_eq!(data["message"], FETCH_MESSAGE);
        assert!(data["timestamp"].is_i64());
    }

    #[tokio::test(start_paused = true)]
    async fn loading_is_set_while_fetching() {
        let cell = new_cell();
        let mut fut = pin!(fetch_data(&cell, DELAY));

        assert!(futures::poll!(fut.as_mut()).is_pending());
        assert!(cell.borrow().is_loading());

        fut.await;
        assert!(!cell.borrow().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn save_data_augments_payload() {
        let cell = new_cell();
        save_data(&cell, json!({ "name": "report" }), DELAY).await.unwrap();

        let store = cell.borrow();
        let data = store.data().unwrap();
        assert_eq!(data["name"], "report");
        assert_eq!(data["saved"], true);
        assert!(data["timestamp"].is_i64());
        assert!(!store.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn save_data_spreads_arrays() {
        let cell = new_cell();
        save_data(&cell, json!(["a", "b"]), DELAY).await.unwrap();

        let store = cell.borrow();
        let data = store.data().unwrap();
        assert_eq!(data["0"], "a");
        assert_eq!(data["1"], "b");
        assert_eq!(data["saved"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_payload_fails_without_waiting() {
        for payload in [Value::Null, json!(42), json!("text"), json!(true)] {
            let cell = new_cell();
            {
                let mut store = cell.borrow_mut();
                let token = store.begin_request();
                store.commit(token, Ok(json!({ "kept": true })), |s, v| s.data = Some(v));
            }

            let mut fut = pin!(save_data(&cell, payload, DELAY));
            let result = match futures::poll!(fut.as_mut()) {
                std::task::Poll::Ready(result) => result,
                std::task::Poll::Pending => panic!("validation waited for the delay"),
            };

            assert_eq!(result, Err(StoreError::Validation("Invalid payload".into())));
            let store = cell.borrow();
            assert_eq!(store.error(), Some("Invalid payload"));
            assert_eq!(store.data(), Some(&json!({ "kept": true })));
            assert!(!store.is_loading());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_currencies_keeps_first_ten_in_order() {
        let cell = new_cell();
        fetch_currencies(&cell, &StaticBody(nbp_body(14)), 10).await;

        let store = cell.borrow();
        let codes: Vec<&str> = store.currencies().iter().map(|r| r.code.as_str()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("C{i:02}")).collect();
        assert_eq!(codes, expected);
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_currencies_keeps_all_of_a_short_list() {
        let cell = new_cell();
        fetch_currencies(&cell, &StaticBody(nbp_body(2)), 10).await;
        assert_eq!(cell.borrow().currencies().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unexpected_shape_gives_empty_list() {
        let cell = new_cell();
        fetch_currencies(&cell, &StaticBody(json!([])), 10).await;

        let store = cell.borrow();
        assert!(store.currencies().is_empty());
        assert_eq!(store.error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn http_error_records_status() {
        let cell = new_cell();
        fetch_currencies(&cell, &Failing(ApiError::Http { status: 404 }), 10).await;

        let store = cell.borrow();
        assert!(!store.is_loading());
        assert!(store.currencies().is_empty());
        let error = store.error().unwrap();
        assert!(error.contains("HTTP error"));
        assert!(error.contains("404"));
    }

    #[tokio::test(start_paused = true)]
    async fn network_error_is_recorded() {
        let cell = new_cell();
        fetch_currencies(&cell, &Failing(ApiError::Network("Network error".into())), 10).await;

        let store = cell.borrow();
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some("Network error"));
        assert!(store.currencies().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failure_keeps_previous_currencies() {
        let cell = new_cell();
        fetch_currencies(&cell, &StaticBody(nbp_body(3)), 10).await;
        fetch_currencies(&cell, &Failing(ApiError::Http { status: 500 }), 10).await;

        let store = cell.borrow();
        assert_eq!(store.currencies().len(), 3);
        assert!(store.error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_clears_everything() {
        let cell = new_cell();
        fetch_data(&cell, DELAY).await;
        fetch_currencies(&cell, &StaticBody(nbp_body(3)), 10).await;
        fetch_currencies(&cell, &Failing(ApiError::Http { status: 404 }), 10).await;

        cell.borrow_mut().reset_data();

        let store = cell.borrow();
        assert!(!store.is_loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.data(), None);
        assert!(store.currencies().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_cannot_overwrite_newer_one() {
        let cell = new_cell();

        let slow = save_data(&cell, json!({ "id": 1 }), Duration::from_millis(1000));
        let fast = save_data(&cell, json!({ "id": 2 }), Duration::from_millis(10));
        let (slow, fast) = futures::join!(slow, fast);

        assert!(slow.is_ok());
        assert!(fast.is_ok());
        assert_eq!(cell.borrow().data().unwrap()["id"], 2);
        assert!(!cell.borrow().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn loading_stays_set_while_newest_request_runs() {
        let cell = new_cell();

        let older = save_data(&cell, json!({ "id": 1 }), Duration::from_millis(10));
        let newer = save_data(&cell, json!({ "id": 2 }), Duration::from_millis(1000));
        let probe = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let store = cell.borrow();
            assert!(store.is_loading());
            assert_eq!(store.data(), None);
        };
        let _ = futures::join!(older, newer, probe);

        assert_eq!(cell.borrow().data().unwrap()["id"], 2);
        assert!(!cell.borrow().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_discards_in_flight_request() {
        let cell = new_cell();
        let mut fut = pin!(fetch_data(&cell, DELAY));
        assert!(futures::poll!(fut.as_mut()).is_pending());

        cell.borrow_mut().reset_data();
        fut.await;

        assert_eq!(cell.borrow().data(), None);
        assert!(!cell.borrow().is_loading());
    }

    #[test]
    fn api_errors_map_to_store_errors() {
        assert_eq!(StoreError::from(ApiError::Http { status: 503 }), StoreError::Http { status: 503 });
        assert_eq!(
            StoreError::from(ApiError::Decode("bad json".into())),
            StoreError::Unknown("bad json".into())
        );
        assert_eq!(StoreError::Http { status: 404 }.to_string(), "HTTP error! status: 404");
    }
}
