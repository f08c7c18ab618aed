// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Happy Day AI Service
//!
//! HTTP front of the Happy Day AI service: a service banner, a health check
//! and the catalog of advertised analysis models.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `models`: model catalog
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod models;
pub mod prelude;

/// Human-readable service title
pub const SERVICE_TITLE: &str = "Happy Day AI Service";

/// Service identifier reported by the health check
pub const SERVICE_NAME: &str = "ai-service";

/// Service version
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and response bodies
pub use api::handlers::{HealthResponse, ModelsResponse, ROOT_MESSAGE, RootResponse};
pub use api::openapi::{ApiDoc, api_doc};
pub use api::{CORS_MAX_AGE, ENDPOINTS, cors_layer, create_router};

/// Model catalog
pub use models::{ModelDescriptor, ModelKind, ModelStatus, catalog};
