// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Random value generation for rotated Secret fields

use crate::error::{OperatorError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::TryRngCore;

/// Draw `len` bytes from `rng` and return them base64 encoded.
/// An RNG failure is returned as an error, never as weak output.
pub fn generate_value_with<R: TryRngCore + ?Sized>(rng: &mut R, len: usize) -> Result<String> {
    let mut raw = vec![0u8; len];
    rng.try_fill_bytes(&mut raw)
        .map_err(|e| OperatorError::Entropy(e.to_string()))?;

    Ok(STANDARD.encode(&raw))
}
