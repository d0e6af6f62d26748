// crates/oilseed-core/src/session.rs
//
// Session handling. A session is an explicit value owning the signed-in
// profile; it is created at sign-in and dropped at sign-out. Operations
// that scope by caller take `&Profile` from the session as an argument,
// there is no process-wide current user.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::profile::Profile;
use crate::traits::IdentityProvider;

/// Sign-in credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An authenticated session. Ended by `IdentityProvider::sign_out`,
/// which consumes it.
#[derive(Debug, Clone)]
pub struct Session {
    profile: Profile,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            started_at: Utc::now(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// In-memory identity backend: a fixed directory of email -> (password,
/// profile). Backs tests and the CLI demo; production deployments sit
/// behind the managed identity service instead.
#[derive(Debug, Default)]
pub struct DirectoryProvider {
    users: HashMap<String, (String, Profile)>,
}

impl DirectoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Overwrites any existing entry for the email.
    pub fn register(&mut self, email: &str, password: &str, profile: Profile) {
        self.users
            .insert(email.to_string(), (password.to_string(), profile));
    }
}

#[async_trait]
impl IdentityProvider for DirectoryProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Profile, PlatformError> {
        match self.users.get(&credentials.email) {
            Some((password, profile)) if *password == credentials.password => {
                Ok(profile.clone())
            }
            Some(_) => Err(PlatformError::Auth("bad credentials".to_string())),
            None => Err(PlatformError::Auth(format!(
                "unknown user: {}",
                credentials.email
            ))),
        }
    }

    async fn sign_out(&self, session: Session) -> Result<(), PlatformError> {
        // The directory holds no per-session state; consuming the session
        // is the whole of sign-out.
        drop(session);
        Ok(())
    }
}
