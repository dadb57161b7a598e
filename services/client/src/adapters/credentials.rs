//! services/client/src/adapters/credentials.rs
//!
//! This module contains the simulated credential verifier.
//! It implements the `CredentialVerifier` port from the `core` crate by
//! comparing against a single configured credential pair after a fixed delay.

use async_trait::async_trait;
use newshaven_core::ports::{CredentialVerifier, PortResult};
use newshaven_core::User;
use std::time::Duration;
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// Accepts exactly one email/password pair and resolves it to a fixed identity.
#[derive(Clone, Debug)]
pub struct DemoCredentialVerifier {
    email: String,
    password: String,
    identity: User,
    latency: Duration,
}

impl DemoCredentialVerifier {
    /// Creates a new `DemoCredentialVerifier`.
    pub fn new(email: String, password: String, identity: User, latency: Duration) -> Self {
        Self {
            email,
            password,
            identity,
            latency,
        }
    }
}

//=========================================================================================
// `CredentialVerifier` Trait Implementation
//=========================================================================================

#[async_trait]
impl CredentialVerifier for DemoCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> PortResult<Option<User>> {
        tokio::time::sleep(self.latency).await;

        let accepted = email == self.email && password == self.password;
        debug!(accepted, "Checked demo credentials.");
        Ok(accepted.then(|| self.identity.clone()))
    }
}
