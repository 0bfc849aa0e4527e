use log::{debug, error, info};
use std::sync::Arc;

use super::assets_model::{AssetCreate, AssetRead, AssetUpdate, DeleteResponse, HealthStatus};
use super::assets_traits::AssetsApi;
use crate::errors::{Error, Result};
use crate::notifications::NotificationStore;

/// Toast texts for the outcome of one asset flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowMessages {
    pub success_title: &'static str,
    pub success_message: &'static str,
    pub failure_title: &'static str,
    pub failure_message: &'static str,
}

impl FlowMessages {
    pub const CREATE: FlowMessages = FlowMessages {
        success_title: "Asset created successfully",
        success_message: "Your new asset has been saved.",
        failure_title: "Creation failed",
        failure_message: "Please verify the fields and try again.",
    };

    pub const UPDATE: FlowMessages = FlowMessages {
        success_title: "Asset updated successfully",
        success_message: "Changes have been saved.",
        failure_title: "Update failed",
        failure_message: "Please try again in a moment.",
    };

    pub const DELETE: FlowMessages = FlowMessages {
        success_title: "Asset deleted",
        success_message: "The asset has been removed.",
        failure_title: "Delete failed",
        failure_message: "Please try again in a moment.",
    };
}

/// Title of the toast shown when assets cannot be loaded.
pub const LOAD_FAILED_TITLE: &str = "Could not load assets";

/// Title of the toast shown when the backend health check fails.
pub const BACKEND_DOWN_TITLE: &str = "Backend unavailable";

/// Asset screens' operations: call the backend, then report the outcome
/// through a toast.
pub struct AssetFlowService {
    api: Arc<dyn AssetsApi>,
    notifications: NotificationStore,
}

impl AssetFlowService {
    pub fn new(api: Arc<dyn AssetsApi>, notifications: NotificationStore) -> Self {
        Self { api, notifications }
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    /// Lists all assets. Only failures produce a toast.
    pub async fn list(&self) -> Result<Vec<AssetRead>> {
        let result = self.api.list().await;
        match &result {
            Ok(assets) => debug!("Loaded {} asset(s)", assets.len()),
            Err(e) => self.report_load_failure(e),
        }
        result
    }

    /// Fetches one asset, e.g. to prefill the edit form.
    pub async fn get(&self, id: i64) -> Result<AssetRead> {
        let result = self.api.get(id).await;
        if let Err(e) = &result {
            self.report_load_failure(e);
        }
        result
    }

    pub async fn create(&self, payload: AssetCreate) -> Result<AssetRead> {
        let outcome = match payload.validate() {
            Ok(()) => self.api.create(&payload).await,
            Err(e) => Err(e),
        };
        if let Ok(asset) = &outcome {
            info!("Created asset {} ({})", asset.ticker, asset.id);
        }
        self.report(outcome, &FlowMessages::CREATE)
    }

    pub async fn update(&self, id: i64, payload: AssetUpdate) -> Result<AssetRead> {
        let outcome = match payload.validate() {
            Ok(()) => self.api.update(id, &payload).await,
            Err(e) => Err(e),
        };
        if outcome.is_ok() {
            info!("Updated asset {}", id);
        }
        self.report(outcome, &FlowMessages::UPDATE)
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteResponse> {
        let outcome = match self.api.delete(id).await {
            Ok(response) if response.ok => Ok(response),
            Ok(_) => Err(Error::Unexpected(format!(
                "backend did not confirm deletion of asset {}",
                id
            ))),
            Err(e) => Err(e),
        };
        if outcome.is_ok() {
            info!("Deleted asset {}", id);
        }
        self.report(outcome, &FlowMessages::DELETE)
    }

    /// Checks the backend. Failures, including a status other than `ok`,
    /// produce a toast.
    pub async fn health(&self) -> Result<HealthStatus> {
        let outcome = match self.api.health().await {
            Ok(status) if status.is_ok() => Ok(status),
            Ok(status) => Err(Error::Unexpected(format!(
                "backend reported status '{}'",
                status.status
            ))),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            error!("{}: {}", BACKEND_DOWN_TITLE, e);
            self.notifications.error(BACKEND_DOWN_TITLE, e.to_string(), None);
        }
        outcome
    }

    fn report<T>(&self, outcome: Result<T>, messages: &FlowMessages) -> Result<T> {
        match &outcome {
            Ok(_) => {
                self.notifications
                    .success(messages.success_title, messages.success_message, None);
            }
            Err(e) => {
                error!("{}: {}", messages.failure_title, e);
                self.notifications
                    .error(messages.failure_title, messages.failure_message, None);
            }
        }
        outcome
    }

    fn report_load_failure(&self, e: &Error) {
        error!("{}: {}", LOAD_FAILED_TITLE, e);
        self.notifications.error(LOAD_FAILED_TITLE, e.to_string(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetType, Currency, HealthStatus};
    use crate::errors::ValidationError;
    use crate::notifications::NotificationKind;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// In-memory backend that mimics the REST API.
    #[derive(Default)]
    struct MockAssetsApi {
        assets: Mutex<Vec<AssetRead>>,
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl MockAssetsApi {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &str) -> Result<()> {
            self.calls.lock().unwrap().push(call.to_string());
            if self.fail {
                return Err(Error::api(500, "Internal Server Error"));
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl AssetsApi for MockAssetsApi {
        async fn list(&self) -> Result<Vec<AssetRead>> {
            self.record("list")?;
            Ok(self.assets.lock().unwrap().clone())
        }

        async fn get(&self, id: i64) -> Result<AssetRead> {
            self.record("get")?;
            self.assets
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned()
                .ok_or_else(|| Error::NotFound(id.to_string()))
        }

        async fn create(&self, payload: &AssetCreate) -> Result<AssetRead> {
            self.record("create")?;
            let mut assets = self.assets.lock().unwrap();
            let asset = AssetRead {
                id: assets.len() as i64 + 1,
                ticker: payload.ticker.clone(),
                asset_type: payload.asset_type,
                current_price: payload.current_price,
                currency: payload.currency,
            };
            assets.push(asset.clone());
            Ok(asset)
        }

        async fn update(&self, id: i64, payload: &AssetUpdate) -> Result<AssetRead> {
            self.record("update")?;
            let mut assets = self.assets.lock().unwrap();
            let asset = assets
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| Error::NotFound(id.to_string()))?;
            if let Some(ticker) = &payload.ticker {
                asset.ticker = ticker.clone();
            }
            if let Some(price) = payload.current_price {
                asset.current_price = price;
            }
            Ok(asset.clone())
        }

        async fn delete(&self, id: i64) -> Result<DeleteResponse> {
            self.record("delete")?;
            let mut assets = self.assets.lock().unwrap();
            let before = assets.len();
            assets.retain(|a| a.id != id);
            if assets.len() == before {
                return Err(Error::NotFound(id.to_string()));
            }
            Ok(DeleteResponse { ok: true })
        }

        async fn health(&self) -> Result<HealthStatus> {
            self.record("health")?;
            Ok(HealthStatus {
                status: "ok".to_string(),
            })
        }
    }

    fn msty() -> AssetCreate {
        AssetCreate {
            ticker: "MSTY".to_string(),
            asset_type: AssetType::Etf,
            current_price: dec!(21.37),
            currency: Currency::Usd,
        }
    }

    fn service(api: Arc<MockAssetsApi>) -> AssetFlowService {
        AssetFlowService::new(api, NotificationStore::new())
    }

    fn toasts(service: &AssetFlowService) -> Vec<(NotificationKind, String, String)> {
        service
            .notifications()
            .snapshot()
            .iter()
            .map(|n| (n.kind, n.title.clone(), n.message.clone()))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_success_enqueues_success_toast() {
        let api = Arc::new(MockAssetsApi::default());
        let service = service(api.clone());

        let asset = service.create(msty()).await.unwrap();

        assert_eq!(asset.id, 1);
        assert_eq!(
            toasts(&service),
            vec![(
                NotificationKind::Success,
                "Asset created successfully".to_string(),
                "Your new asset has been saved.".to_string()
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_failure_enqueues_error_toast() {
        let api = Arc::new(MockAssetsApi::failing());
        let service = service(api);

        let result = service.create(msty()).await;

        assert!(matches!(result, Err(Error::Api { status: 500, .. })));
        let toasts = toasts(&service);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].0, NotificationKind::Error);
        assert_eq!(toasts[0].1, FlowMessages::CREATE.failure_title);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_create_never_reaches_backend() {
        let api = Arc::new(MockAssetsApi::default());
        let service = service(api.clone());
        let mut payload = msty();
        payload.ticker = "   ".to_string();

        let result = service.create(payload).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
        assert!(api.calls().is_empty());
        assert_eq!(toasts(&service)[0].1, "Creation failed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_reports_both_outcomes() {
        let api = Arc::new(MockAssetsApi::default());
        let service = service(api.clone());
        let created = service.create(msty()).await.unwrap();
        service.notifications().clear();

        let update = AssetUpdate {
            current_price: Some(dec!(22)),
            ..AssetUpdate::default()
        };
        let updated = service.update(created.id, update.clone()).await.unwrap();
        assert_eq!(updated.current_price, dec!(22));

        let missing = service.update(99, update).await;
        assert!(matches!(missing, Err(Error::NotFound(_))));

        let titles: Vec<_> = toasts(&service).into_iter().map(|t| t.1).collect();
        assert_eq!(titles, vec!["Asset updated successfully", "Update failed"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_reports_outcome() {
        let api = Arc::new(MockAssetsApi::default());
        let service = service(api.clone());
        let created = service.create(msty()).await.unwrap();
        service.notifications().clear();

        service.delete(created.id).await.unwrap();
        assert!(service.delete(created.id).await.is_err());

        let kinds: Vec<_> = toasts(&service).into_iter().map(|t| t.0).collect();
        assert_eq!(kinds, vec![NotificationKind::Success, NotificationKind::Error]);
        assert_eq!(api.calls(), vec!["create", "delete", "delete"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_is_silent_on_success_and_loud_on_failure() {
        let ok = service(Arc::new(MockAssetsApi::default()));
        assert!(ok.list().await.unwrap().is_empty());
        assert!(ok.notifications().is_empty());

        let failing = service(Arc::new(MockAssetsApi::failing()));
        assert!(failing.list().await.is_err());
        let toasts = toasts(&failing);
        assert_eq!(toasts[0].1, LOAD_FAILED_TITLE);
        assert!(toasts[0].2.contains("500"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_health_failure_is_reported() {
        let ok = service(Arc::new(MockAssetsApi::default()));
        assert!(ok.health().await.unwrap().is_ok());
        assert!(ok.notifications().is_empty());

        let failing = service(Arc::new(MockAssetsApi::failing()));
        assert!(failing.health().await.is_err());
        assert_eq!(toasts(&failing)[0].1, BACKEND_DOWN_TITLE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flow_toasts_expire_on_their_own() {
        let service = service(Arc::new(MockAssetsApi::default()));
        service.create(msty()).await.unwrap();
        assert_eq!(service.notifications().len(), 1);

        tokio::time::sleep(std::time::Duration::from_millis(
            crate::constants::DEFAULT_TOAST_TTL_MS + 1,
        ))
        .await;
        assert!(service.notifications().is_empty());
    }
}
