// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OperatorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Entropy source failed: {0}")]
    Entropy(String),

    #[error("Resource {0} has no namespace")]
    MissingNamespace(String),

    #[error("CRD not installed: {0}")]
    CrdNotInstalled(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OperatorError>;
