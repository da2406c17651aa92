//! REST request helpers, one function per endpoint.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, attaching the
//! bearer token from durable storage where the endpoint requires it.
//! Native builds: stubs returning [`ApiError::Unavailable`] so callers
//! compile and the pure logic stays testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! A server rejection (`success:false` or a non-2xx status) and a transport
//! failure are both surfaced as [`ApiError`]; the session layer treats them
//! identically (one fail-transition, one toast, no retry).

#![allow(clippy::unused_async)]

use super::types::{
    ApiSuccess, AuthPayload, EventSummary, LeaderboardEntry, ProfileDetails, ProjectDetail,
    ProjectSummary, TeamSummary, TechStackItem,
};

#[cfg(feature = "csr")]
use super::types::ApiEnvelope;
#[cfg(feature = "csr")]
use crate::util::storage;
#[cfg(feature = "csr")]
use gloo_net::http::{Request, RequestBuilder, Response};

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered and said no; `message` is its explanation.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never completed (connectivity, CORS, malformed body).
    #[error("network error: {0}")]
    Transport(String),
    /// Native stub: there is no browser to make the call from.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Whether this is the duplicate-account conflict signal from signup.
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Rejected { status: 409, .. })
    }

    const fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected { status: 404, .. })
    }
}

/// Attach `Authorization: Bearer <accessToken>` if a token is stored.
#[cfg(feature = "csr")]
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get(storage::ACCESS_TOKEN) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Rejected`], preferring the
/// server's envelope message when the body carries one.
#[cfg(feature = "csr")]
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .map(|env| env.message)
        .ok()
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Rejected { status, message }
}

/// Unwrap a `{success, message, data}` envelope into its payload.
#[cfg(feature = "csr")]
async fn read_envelope<T: serde::de::DeserializeOwned>(
    resp: Response,
) -> Result<ApiSuccess<T>, ApiError> {
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    let status = resp.status();
    let env: ApiEnvelope<T> = resp.json().await.map_err(transport)?;
    if !env.success {
        return Err(ApiError::Rejected {
            status,
            message: env.message,
        });
    }
    match env.data {
        Some(data) => Ok(ApiSuccess {
            data,
            message: env.message,
        }),
        None => Err(ApiError::Transport(
            "response envelope carried no data".to_owned(),
        )),
    }
}

/// Unwrap an envelope that carries no payload, keeping only the message.
#[cfg(feature = "csr")]
async fn read_message(resp: Response) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    let status = resp.status();
    let env: ApiEnvelope<serde_json::Value> = resp.json().await.map_err(transport)?;
    if env.success {
        Ok(env.message)
    } else {
        Err(ApiError::Rejected {
            status,
            message: env.message,
        })
    }
}

/// Fetch a bare JSON array from a directory endpoint.
#[cfg(feature = "csr")]
async fn read_list<T: serde::de::DeserializeOwned>(url: &str) -> Result<Vec<T>, ApiError> {
    let resp = authorized(Request::get(url)).send().await.map_err(transport)?;
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<Vec<T>>().await.map_err(transport)
}

/// `POST /api/v1/auth/login`.
pub async fn login(email: &str, password: &str) -> Result<ApiSuccess<AuthPayload>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = Request::post("/api/v1/auth/login")
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/v1/auth/signup`. Rejects with a 409 when the email is
/// already registered.
pub async fn signup(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<ApiSuccess<AuthPayload>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "confirmPassword": confirm_password,
        });
        let resp = Request::post("/api/v1/auth/signup")
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password, confirm_password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/v1/auth/logout`. Returns the server's farewell message.
pub async fn logout() -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::post("/api/v1/auth/logout"))
            .send()
            .await
            .map_err(transport)?;
        read_message(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/v1/leaderboard`, public.
pub async fn fetch_leaderboard() -> Result<Vec<LeaderboardEntry>, ApiError> {
    #[cfg(feature = "csr")]
    {
        read_list("/api/v1/leaderboard").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/v1/event`, public.
pub async fn fetch_events() -> Result<Vec<EventSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        read_list("/api/v1/event").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/v1/project`: the signed-in user's projects.
pub async fn fetch_projects() -> Result<Vec<ProjectSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        read_list("/api/v1/project").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/v1/project/{id}`: one project with its owner's details.
pub async fn fetch_project(id: &str) -> Result<ProjectDetail, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/v1/project/{id}");
        let resp = authorized(Request::get(&url)).send().await.map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<ProjectDetail>().await.map_err(transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/v1/techstack/me/{user_id}`.
pub async fn fetch_tech_stack(user_id: &str) -> Result<Vec<TechStackItem>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("/api/v1/techstack/me/{user_id}");
        read_list(&url).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/v1/team/me`. `Ok(None)` when the user has no team yet.
pub async fn fetch_team() -> Result<Option<TeamSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::get("/api/v1/team/me"))
            .send()
            .await
            .map_err(transport)?;
        match read_envelope::<TeamSummary>(resp).await {
            Ok(ok) => Ok(Some(ok.data)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/v1/user`: submit the profile-completion form. Returns the
/// server's confirmation message.
pub async fn update_profile(details: &ProfileDetails) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(Request::put("/api/v1/user"))
            .json(details)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_message(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = details;
        Err(ApiError::Unavailable)
    }
}
