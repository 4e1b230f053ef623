//! HTTP API handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ApiError;
use crate::faq;
use crate::greeting::GreetingStore;
use crate::metrics;
use crate::registry::{UserRecord, UserRegistry};

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Greeting template store.
    pub greeting: GreetingStore,
    /// In-memory user registry.
    pub users: UserRegistry,
}

impl AppState {
    /// Create app state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            greeting: GreetingStore::new(config.greeting.clone()),
            users: UserRegistry::new(),
        }
    }
}

/// Greeting response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// The formatted greeting.
    pub message: String,
}

/// Body for the greeting-update endpoint.
///
/// The key itself may be absent, which is rejected; an empty string is
/// accepted as-is.
#[derive(Debug, Deserialize)]
pub struct UpdateGreeting {
    /// New greeting template.
    #[serde(default)]
    pub greeting: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// `GET /greet` - greet the world with the current template.
pub async fn greet_default(State(state): State<AppState>) -> impl IntoResponse {
    Json(MessageResponse {
        message: state.greeting.greet("World").await,
    })
}

/// `GET /greet/:name` - greet the given name with the current template.
pub async fn greet_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    Json(MessageResponse {
        message: state.greeting.greet(&name).await,
    })
}

/// `GET /greet/questions` - the static FAQ list.
pub async fn questions() -> impl IntoResponse {
    Json(faq::entries())
}

/// `PUT /greet/greeting` - replace the greeting template.
///
/// Rejects a body without the `greeting` key; an empty-string template is
/// accepted unchanged.
pub async fn update_greeting(
    State(state): State<AppState>,
    Json(body): Json<UpdateGreeting>,
) -> Result<StatusCode, ApiError> {
    let new_greeting = body.greeting.ok_or(ApiError::MissingGreeting)?;

    info!(greeting = %new_greeting, "Updating greeting template");
    state.greeting.set_message(new_greeting).await;
    metrics::inc_greeting_updates();

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /greet/login` - look up a stored record by exact credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<UserRecord>,
) -> Result<Json<UserRecord>, ApiError> {
    match state
        .users
        .lookup(&credentials.username, &credentials.password)
        .await
    {
        Some(user) => {
            debug!(username = %user.username, "Login succeeded");
            metrics::inc_logins_succeeded();
            Ok(Json(user))
        }
        None => {
            debug!(username = %credentials.username, "Login failed");
            metrics::inc_logins_failed();
            Err(ApiError::InvalidCredentials)
        }
    }
}

/// `POST /greet/signup` - store a new record and echo it back.
///
/// Always responds 200 with the submitted record, even when the username
/// already existed and the add was silently ignored.
pub async fn signup(
    State(state): State<AppState>,
    Json(user): Json<UserRecord>,
) -> impl IntoResponse {
    debug!(username = %user.username, "Signup request");
    state.users.add(user.clone()).await;
    metrics::inc_signups();

    Json(user)
}

/// `GET /greet/logout` - stateless acknowledgement; no session is tracked.
pub async fn logout() -> impl IntoResponse {
    Json(MessageResponse {
        message: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_state_uses_configured_greeting() {
        let config = Config {
            greeting: "Howdy".to_string(),
            ..Config::default()
        };

        let state = AppState::new(&config);
        assert_eq!(state.greeting.greet("World").await, "Howdy World!");
        assert!(state.users.is_empty().await);
    }

    #[test]
    fn update_greeting_body_distinguishes_absent_from_empty() {
        let absent: UpdateGreeting = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.greeting, None);

        let empty: UpdateGreeting = serde_json::from_str(r#"{"greeting":""}"#).unwrap();
        assert_eq!(empty.greeting, Some(String::new()));
    }
}
