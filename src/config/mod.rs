// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Happy Day AI service
//!
//! Loads configuration from environment variables (and an optional `.env` file).

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8081";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        Config { server_addr }
    }

    /// Parses the listen address
    pub fn validate(&self) -> Result<SocketAddr> {
        self.server_addr.parse().map_err(|e| {
            AppError::Config(format!(
                "Invalid {} '{}': {}",
                env_vars::SERVER_ADDR,
                self.server_addr,
                e
            ))
        })
    }
}
