//! Materials Dashboard Library
//!
//! Filtering, stock classification and aggregate reporting over three
//! in-memory collections: the materials catalog, the tracked inventory
//! and the client directory. The HTTP API and the CLI are thin layers over
//! the services defined here.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod api;
pub mod config;
pub mod errors;
pub mod events;
pub mod filters;
pub mod handlers;
pub mod middleware_helpers;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod tracing;

use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::{
    config::AppConfig,
    errors::ServiceError,
    events::ActivityLog,
    repositories::RecordStore,
    services::{ClientDirectoryService, InventoryService, MaterialCatalogService},
};

pub use api::api_v1_routes;

/// Shared handler state.
///
/// The catalog and the activity log are the only writable pieces; inventory
/// and clients are fixed for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub materials: Arc<RwLock<MaterialCatalogService>>,
    pub inventory: Arc<InventoryService>,
    pub clients: Arc<ClientDirectoryService>,
    pub activity: Arc<RwLock<ActivityLog>>,
}

impl AppState {
    /// State seeded with the built-in sample collections.
    pub fn from_config(config: &AppConfig) -> Result<Self, ServiceError> {
        Ok(Self::new(
            config.clone(),
            MaterialCatalogService::new(
                RecordStore::new(seed::sample_materials())?,
                config.low_stock_threshold,
            ),
            InventoryService::new(
                RecordStore::new(seed::sample_inventory())?,
                config.low_stock_alerts,
            ),
            ClientDirectoryService::new(RecordStore::new(seed::sample_clients())?),
        ))
    }

    pub fn new(
        config: AppConfig,
        materials: MaterialCatalogService,
        inventory: InventoryService,
        clients: ClientDirectoryService,
    ) -> Self {
        let activity = ActivityLog::new(config.activity_log_capacity);
        Self {
            config,
            materials: Arc::new(RwLock::new(materials)),
            inventory: Arc::new(inventory),
            clients: Arc::new(clients),
            activity: Arc::new(RwLock::new(activity)),
        }
    }
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
    /// Number of records in `data` for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::tracing::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
            count: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }

    pub fn validation_errors(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some("Validation failed".to_string()),
            errors: Some(errors),
            meta: Some(ResponseMeta::capture()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Success response carrying a list and its length.
    pub fn list(items: Vec<T>) -> Self {
        let mut response = Self::success(items);
        if let (Some(meta), Some(items)) = (response.meta.as_mut(), response.data.as_ref()) {
            meta.count = Some(items.len());
        }
        response
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

#[cfg(test)]
mod response_tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn success_response_includes_request_metadata() {
        let response =
            crate::tracing::scope_request_id(crate::tracing::RequestId::new("meta-123"), async {
                ApiResponse::success("ok")
            })
            .await;

        let meta = response.meta.expect("metadata expected");
        assert_eq!(meta.request_id.as_deref(), Some("meta-123"));
        DateTime::parse_from_rfc3339(&meta.timestamp).expect("timestamp should parse");
    }

    #[tokio::test]
    async fn error_response_includes_request_metadata() {
        let response =
            crate::tracing::scope_request_id(crate::tracing::RequestId::new("meta-err"), async {
                ApiResponse::<()>::error("oops".into())
            })
            .await;

        let meta = response.meta.expect("metadata expected");
        assert_eq!(meta.request_id.as_deref(), Some("meta-err"));
        assert!(!meta.timestamp.is_empty());
    }

    #[test]
    fn list_response_counts_items() {
        let response = ApiResponse::list(vec![1, 2, 3]);
        assert!(response.success);
        assert_eq!(response.meta.and_then(|m| m.count), Some(3));
    }

    #[test]
    fn state_is_seeded_from_config() {
        let mut config = AppConfig::new("127.0.0.1".into(), 0, "test".into());
        config.low_stock_threshold = 200;
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.inventory.len(), 4);
        assert_eq!(state.clients.len(), 4);

        let materials = state.materials.try_read().unwrap();
        assert_eq!(materials.len(), 4);
        assert_eq!(materials.low_stock_threshold(), 200);
    }
}
