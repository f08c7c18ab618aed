// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

pub mod health;
pub mod models;
pub mod root;

pub use health::{HealthResponse, health_check};
pub use models::{ModelsResponse, list_models};
pub use root::{ROOT_MESSAGE, RootResponse, root};
