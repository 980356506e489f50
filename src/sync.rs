//! Best-effort sync of appearance preferences to the server.
//!
//! Local state is the source of truth. A push is fire-and-forget: the caller
//! never waits, the outcome is only logged, and nothing is retried or rolled
//! back.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, `{"status":"error"}` replies and
//! undecodable bodies all map to [`SyncError`] and end up in the console.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use serde::{Deserialize, Serialize};

use crate::prefs::{Theme, ThemeMode};

/// One preference write destined for the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PreferenceUpdate {
    Theme { theme: Theme },
    BlurEffect { blur_effect: bool },
    ThemePreference { theme_preference: ThemeMode },
}

impl PreferenceUpdate {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Theme { .. } => "/api/update-theme",
            Self::BlurEffect { .. } => "/api/update-blur-effect",
            Self::ThemePreference { .. } => "/api/update-theme-preference",
        }
    }

    /// JSON request body.
    pub fn body(&self) -> serde_json::Value {
        // Every variant is a plain struct of strings/bools.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("server rejected update: {0}")]
    Rejected(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Reply shape of the preference endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SyncResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub echoed: serde_json::Map<String, serde_json::Value>,
}

impl SyncResponse {
    /// Decode a reply body; an HTTP error status takes precedence over the body.
    ///
    /// # Errors
    ///
    /// Returns a [`SyncError`] for non-2xx statuses, unparsable bodies, and
    /// replies whose `status` is not `"success"`.
    pub fn from_reply(status: u16, body: &str) -> Result<Self, SyncError> {
        let parsed = serde_json::from_str::<Self>(body);
        if !(200..300).contains(&status) {
            let message = parsed
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| "no message".to_owned());
            return Err(SyncError::Status { status, message });
        }
        let response = parsed.map_err(|e| SyncError::Decode(e.to_string()))?;
        if response.status != "success" {
            return Err(SyncError::Rejected(
                response.message.unwrap_or_else(|| response.status.clone()),
            ));
        }
        Ok(response)
    }
}

/// Sink for preference writes. Implementations must not block the caller.
pub trait PreferenceSync: Clone + 'static {
    fn push(&self, update: PreferenceUpdate);
}

/// Forwards pushes only when the user is signed in.
#[derive(Clone, Debug)]
pub struct GatedSync<S> {
    inner: S,
    authenticated: bool,
}

impl<S: PreferenceSync> GatedSync<S> {
    pub fn new(inner: S, authenticated: bool) -> Self {
        Self { inner, authenticated }
    }
}

impl<S: PreferenceSync> PreferenceSync for GatedSync<S> {
    fn push(&self, update: PreferenceUpdate) {
        if self.authenticated {
            self.inner.push(update);
        } else {
            log::debug!("skipping {} sync for anonymous visitor", update.endpoint());
        }
    }
}

/// POSTs updates with `gloo-net` on a spawned local task.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSync;

#[cfg(feature = "hydrate")]
impl HttpSync {
    async fn send(update: PreferenceUpdate) -> Result<SyncResponse, SyncError> {
        let resp = gloo_net::http::Request::post(update.endpoint())
            .json(&update.body())
            .map_err(|e| SyncError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| SyncError::Decode(e.to_string()))?;
        SyncResponse::from_reply(status, &body)
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceSync for HttpSync {
    fn push(&self, update: PreferenceUpdate) {
        wasm_bindgen_futures::spawn_local(async move {
            match Self::send(update).await {
                Ok(resp) => log::info!("{} synced: {:?}", update.endpoint(), resp.echoed),
                Err(e) => log::error!("{} sync failed: {e}", update.endpoint()),
            }
        });
    }
}
