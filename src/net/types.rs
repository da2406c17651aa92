//! Serde wire types for the CyberHunter REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard `{success, message, data}` envelope wrapped around mutating
/// endpoints (auth, profile updates). Read-only directory endpoints return
/// bare JSON arrays instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// A successfully unwrapped envelope: the payload plus the server's
/// human-readable message (shown as a toast).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSuccess<T> {
    pub data: T,
    pub message: String,
}

/// Access/refresh token strings persisted to durable storage on login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// `data` payload of a successful login or signup response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub points: i64,
}

impl AuthPayload {
    /// The token pair carried by this payload.
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            access: self.access_token.clone(),
            refresh: self.refresh_token.clone(),
        }
    }

    /// Convert into the session's profile snapshot. Completeness is decided
    /// by the caller: login infers it from the payload, signup always starts
    /// incomplete.
    pub fn into_profile(self, is_profile_complete: bool) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name,
            email: self.email,
            profile_picture: self.profile_picture,
            is_profile_complete,
            points: self.points,
        }
    }
}

/// The signed-in user's profile snapshot held by the session store and
/// serialized verbatim into durable storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_profile_complete: bool,
    #[serde(default)]
    pub points: i64,
}

/// One row of the public leaderboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub team: Option<String>,
}

/// A project card on the profile/projects pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_thumbnail: Option<String>,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /api/v1/project/{id}` body: the project plus its owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project: ProjectSummary,
    #[serde(default)]
    pub user_detail: Option<UserProfile>,
}

/// One technology badge on a user's profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStackItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A platform event (hackathon, workshop, ...) on the events page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The signed-in user's team, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Editable profile fields submitted from the profile-completion page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub branch: String,
}
