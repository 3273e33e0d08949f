// B2 Rust Library for Backblaze B2 Cloud Storage
// Copyright 2026 The b2-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credential providers

use crate::b2::error::ConfigErr;
use std::fmt;

pub const ENV_APPLICATION_KEY_ID: &str = "B2_APPLICATION_KEY_ID";
pub const ENV_APPLICATION_KEY: &str = "B2_APPLICATION_KEY";

#[derive(Clone)]
/// Credentials contain an application key id (or account id for the master
/// key) and the secret application key
pub struct Credentials {
    pub key_id: String,
    pub application_key: String,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, application_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            application_key: application_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("application_key", &"[REDACTED]")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Result<Credentials, ConfigErr>;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given key id and application key
    ///
    /// # Examples
    ///
    /// ```
    /// use backblaze::b2::creds::StaticProvider;
    /// let provider = StaticProvider::new("000a1b2c3d4e5f60000000001", "K000secret");
    /// ```
    pub fn new(key_id: &str, application_key: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials::new(key_id, application_key),
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Result<Credentials, ConfigErr> {
        Ok(self.creds.clone())
    }
}

#[derive(Clone, Debug, Default)]
/// Reads `B2_APPLICATION_KEY_ID` and `B2_APPLICATION_KEY` on every fetch
pub struct EnvProvider;

impl EnvProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Provider for EnvProvider {
    fn fetch(&self) -> Result<Credentials, ConfigErr> {
        let key_id = std::env::var(ENV_APPLICATION_KEY_ID)
            .map_err(|_| ConfigErr::MissingEnvVar(ENV_APPLICATION_KEY_ID))?;
        let application_key = std::env::var(ENV_APPLICATION_KEY)
            .map_err(|_| ConfigErr::MissingEnvVar(ENV_APPLICATION_KEY))?;
        Ok(Credentials::new(key_id, application_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider() {
        let creds = StaticProvider::new("id", "key").fetch().unwrap();
        assert_eq!(creds.key_id, "id");
        assert_eq!(creds.application_key, "key");
    }

    #[test]
    fn test_debug_redacts_key() {
        let s = format!("{:?}", Credentials::new("id", "super-secret"));
        assert!(s.contains("id"));
        assert!(!s.contains("super-secret"));
    }
}
