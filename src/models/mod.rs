// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Model catalog advertised by the service
//!
//! The catalog is fixed at compile time. Nothing here loads or runs a model;
//! the descriptors only tell clients which analyses the service offers.

use serde::Serialize;
use utoipa::ToSchema;

/// Kind of analysis a model performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    EmotionAnalysis,
    CrisisDetection,
}

/// Availability of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModelStatus {
    Active,
}

/// A single entry of the model listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ModelDescriptor {
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
    #[serde(rename = "type")]
    pub kind: ModelKind,
    pub status: ModelStatus,
}

static CATALOG: [ModelDescriptor; 2] = [
    ModelDescriptor {
        name: "emotion-classifier-v1",
        version: "1.0.0",
        kind: ModelKind::EmotionAnalysis,
        status: ModelStatus::Active,
    },
    ModelDescriptor {
        name: "crisis-detector-v1",
        version: "1.0.0",
        kind: ModelKind::CrisisDetection,
        status: ModelStatus::Active,
    },
];

/// Returns the advertised models in listing order
pub fn catalog() -> &'static [ModelDescriptor] {
    &CATALOG
}
