// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rewriting every data field of a Secret with fresh random values

use crate::constants::SECRET_VALUE_LEN;
use crate::error::Result;
use crate::rotation::generator::generate_value_with;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{api::PostParams, Api, ResourceExt};
use rand::rngs::OsRng;
use rand::TryRngCore;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Outcome of a single rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// All fields were rewritten and the Secret was persisted
    Rotated { fields: usize },
    /// The Secret carries no data fields, nothing was written
    Empty,
}

/// `namespace/name` of a Secret, for log lines
pub fn secret_ref(secret: &Secret) -> String {
    format!("{}/{}", secret.namespace().unwrap_or_default(), secret.name_any())
}

/// Replace every data value of `secret` with a freshly generated one.
///
/// All values are generated before any is written, so an RNG failure leaves
/// the Secret untouched. Keys are never added or removed. Returns the number
/// of rotated fields.
pub fn rotate_data<R: TryRngCore + ?Sized>(secret: &mut Secret, rng: &mut R) -> Result<usize> {
    let Some(data) = secret.data.as_mut() else {
        return Ok(0);
    };

    let rotated = data
        .keys()
        .map(|key| {
            let value = generate_value_with(&mut *rng, SECRET_VALUE_LEN)?;
            Ok((key.clone(), ByteString(value.into_bytes())))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    let fields = rotated.len();
    *data = rotated;
    Ok(fields)
}

/// Rotate all data fields of `secret` and persist it with a full replace.
///
/// The resourceVersion read with the Secret is sent back unchanged; a
/// conflicting concurrent write surfaces as an error without retry.
#[instrument(skip(api, secret), fields(secret = %secret_ref(&secret)))]
pub async fn rotate_secret(api: &Api<Secret>, mut secret: Secret) -> Result<Rotation> {
    let fields = rotate_data(&mut secret, &mut OsRng)?;
    if fields == 0 {
        debug!("Secret has no data fields, nothing to rotate");
        return Ok(Rotation::Empty);
    }

    api.replace(&secret.name_any(), &PostParams::default(), &secret)
        .await?;

    info!("Rotated {} field(s)", fields);
    Ok(Rotation::Rotated { fields })
}
