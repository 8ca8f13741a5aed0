#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use crate::adapters::dynamodb::StoreClient;
use crate::adapters::dynamodb::message_group_repo::MessageGroupRepository;
use crate::adapters::storage::S3UploadSigner;
use crate::api::{AppState, MgmtState};
use crate::config::Config;
use crate::services::activity_service::{MockActivitySource, UserActivitiesService};
use crate::services::avatar_service::AvatarService;
use crate::services::health_service::HealthService;
use crate::services::message_group_service::MessageGroupService;
use std::sync::Arc;
use tokio::sync::watch;

pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod telemetry;

/// Wires the services for both routers on top of an already built store client.
#[must_use]
pub fn build_state(
    config: &Config,
    store: Arc<dyn StoreClient>,
    avatars: Option<AvatarService>,
) -> (AppState, MgmtState) {
    let repo = MessageGroupRepository::new(Arc::clone(&store), config.store.messages_table.clone());

    let app_state = AppState {
        activities: UserActivitiesService::new(Arc::new(MockActivitySource)),
        message_groups: MessageGroupService::new(repo),
        avatars,
    };
    let mgmt_state = MgmtState {
        health_service: HealthService::new(store, config.store.messages_table.clone(), config.health.clone()),
    };

    (app_state, mgmt_state)
}

/// Builds the AWS clients described by `config` and wires the services around them.
pub async fn initialize_state(config: &Config) -> (AppState, MgmtState) {
    let store: Arc<dyn StoreClient> = Arc::new(adapters::dynamodb::initialize_client(&config.aws).await);

    let avatars = if let Some(bucket) = &config.uploads.uploads_bucket {
        let s3_client = adapters::storage::s3::initialize_client(&config.aws).await;
        let signer = Arc::new(S3UploadSigner::new(s3_client, bucket.clone()));
        Some(AvatarService::new(signer, &config.uploads))
    } else {
        tracing::info!("No uploads bucket configured, avatar uploads disabled");
        None
    };

    build_state(config, store, avatars)
}

/// Flips `shutdown_tx` to `true` on Ctrl-C or SIGTERM.
pub fn spawn_signal_handler(shutdown_tx: watch::Sender<bool>) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
            () = terminate => tracing::info!("Received SIGTERM, shutting down"),
        }

        let _ = shutdown_tx.send(true);
    });
}
