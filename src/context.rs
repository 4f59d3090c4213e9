//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::{Role, UserProfile};
use crate::session::Session;

/// API client and configuration, provided once at the root
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Session) -> Self {
        let api = ApiClient::new(&config.api_base, session);
        Self {
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    /// Client handle for one request; clones share the connection config
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Absolute URL for an uploaded asset path
    pub fn asset(&self, path: &str) -> String {
        self.config.with_value(|c| c.asset(path))
    }

    pub fn asset_base(&self) -> String {
        self.config.with_value(|c| c.asset_base.clone())
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Reactive view of the stored session
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Session>,
    /// Stored token - read
    pub token: ReadSignal<Option<String>>,
    /// Stored token - write
    set_token: WriteSignal<Option<String>>,
    /// Signed-in profile - read
    pub profile: ReadSignal<Option<UserProfile>>,
    /// Signed-in profile - write
    set_profile: WriteSignal<Option<UserProfile>>,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        let (token, set_token) = signal(session.token());
        let (profile, set_profile) = signal(session.profile());
        Self {
            session: StoredValue::new(session),
            token,
            set_token,
            profile,
            set_profile,
        }
    }

    /// Re-read the store after something else wrote to it (login)
    pub fn refresh(&self) {
        self.session.with_value(|s| {
            self.set_token.set(s.token());
            self.set_profile.set(s.profile());
        });
    }

    /// Clear the stored session and notify dependents
    pub fn sign_out(&self) {
        self.session.with_value(Session::sign_out);
        self.set_token.set(None);
        self.set_profile.set(None);
    }

    pub fn has_token(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn role(&self) -> Role {
        self.profile.get().map(|p| p.role).unwrap_or_default()
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
