// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use happy_day_ai_service::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::create_router;
pub use crate::api::openapi::api_doc;
pub use crate::api::handlers::{HealthResponse, ModelsResponse, RootResponse};

// Model catalog
pub use crate::models::{ModelDescriptor, ModelKind, ModelStatus, catalog};
