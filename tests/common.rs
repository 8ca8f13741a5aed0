#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc, unreachable_pub)]
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use clap::Parser;
use cruddur_backend::adapters::dynamodb::records::RawItem;
use cruddur_backend::adapters::dynamodb::{QueryParams, StoreClient};
use cruddur_backend::config::Config;
use cruddur_backend::error::{AppError, Result};
use cruddur_backend::services::avatar_service::AvatarService;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Mirrors `message_group_repo::tests::FakeStore`, which integration tests cannot import.
#[derive(Debug, Default)]
pub struct FakeStore {
    pub items: Vec<RawItem>,
    pub fail: bool,
    pub queries: Mutex<Vec<QueryParams>>,
}

#[async_trait]
impl StoreClient for FakeStore {
    async fn query_partition(&self, params: &QueryParams) -> Result<Vec<RawItem>> {
        self.queries.lock().unwrap().push(params.clone());
        if self.fail {
            return Err(AppError::StoreAccess("ProvisionedThroughputExceededException".into()));
        }
        Ok(self.items.clone())
    }

    async fn check_table(&self, _table: &str) -> Result<()> {
        if self.fail { Err(AppError::StoreAccess("ResourceNotFoundException".into())) } else { Ok(()) }
    }
}

pub fn group_item(sk: &str, uuid: &str, display_name: &str, handle: &str, message: &str) -> RawItem {
    [
        ("sk", sk),
        ("message_group_uuid", uuid),
        ("user_display_name", display_name),
        ("user_handle", handle),
        ("message", message),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
    .collect()
}

pub fn get_test_config() -> Config {
    Config::try_parse_from(["cruddur-backend", "--port", "0", "--mgmt-port", "0"]).unwrap()
}

pub struct TestApp {
    pub server_url: String,
    pub mgmt_url: String,
    pub client: reqwest::Client,
    pub store: Arc<FakeStore>,
}

impl TestApp {
    pub async fn spawn(store: FakeStore) -> Self {
        Self::spawn_with_avatars(store, None).await
    }

    pub async fn spawn_with_avatars(store: FakeStore, avatars: Option<AvatarService>) -> Self {
        cruddur_backend::telemetry::init_test_telemetry();

        let config = get_test_config();
        let store = Arc::new(store);
        let (app_state, mgmt_state) =
            cruddur_backend::build_state(&config, Arc::<FakeStore>::clone(&store), avatars);

        let server_url = serve(cruddur_backend::api::app_router(app_state)).await;
        let mgmt_url = serve(cruddur_backend::api::mgmt_router(mgmt_state)).await;

        Self { server_url, mgmt_url, client: reqwest::Client::new(), store }
    }
}

async fn serve(router: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
