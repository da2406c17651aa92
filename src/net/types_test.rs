use super::*;

#[test]
fn login_payload_parses_camel_case_and_null_picture() {
    let body = serde_json::json!({
        "success": true,
        "message": "Logged in",
        "data": {
            "_id": "u-1",
            "accessToken": "T1",
            "refreshToken": "T2",
            "email": "a@b.com",
            "profilePicture": null
        }
    });
    let env: ApiEnvelope<AuthPayload> = serde_json::from_value(body).expect("envelope");
    assert!(env.success);
    assert_eq!(env.message, "Logged in");

    let data = env.data.expect("payload");
    assert_eq!(data.id, "u-1");
    assert_eq!(data.access_token, "T1");
    assert_eq!(data.refresh_token, "T2");
    assert!(data.profile_picture.is_none());
}

#[test]
fn envelope_tolerates_missing_message_and_data() {
    let env: ApiEnvelope<AuthPayload> =
        serde_json::from_value(serde_json::json!({"success": false})).expect("envelope");
    assert!(!env.success);
    assert_eq!(env.message, "");
    assert!(env.data.is_none());
}

#[test]
fn into_profile_keeps_caller_decided_completeness() {
    let payload = AuthPayload {
        id: "u-2".to_owned(),
        email: "a@b.com".to_owned(),
        profile_picture: Some("pic.png".to_owned()),
        ..AuthPayload::default()
    };
    let profile = payload.into_profile(false);
    assert!(!profile.is_profile_complete);
    assert_eq!(profile.email, "a@b.com");
}

#[test]
fn token_pair_copies_both_tokens() {
    let payload = AuthPayload {
        access_token: "T1".to_owned(),
        refresh_token: "T2".to_owned(),
        ..AuthPayload::default()
    };
    let pair = payload.token_pair();
    assert_eq!(pair.access, "T1");
    assert_eq!(pair.refresh, "T2");
}

#[test]
fn project_summary_maps_mongo_id() {
    let body = serde_json::json!([{
        "_id": "p-1",
        "projectName": "Orbit",
        "projectThumbnail": "thumb.png"
    }]);
    let list: Vec<ProjectSummary> = serde_json::from_value(body).expect("projects");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "p-1");
    assert_eq!(list[0].project_name, "Orbit");
    assert_eq!(list[0].project_thumbnail.as_deref(), Some("thumb.png"));
}

#[test]
fn user_profile_snapshot_round_trips_through_json() {
    let profile = UserProfile {
        id: "u-3".to_owned(),
        name: Some("Ada".to_owned()),
        email: "ada@b.com".to_owned(),
        profile_picture: None,
        is_profile_complete: true,
        points: 120,
    };
    let raw = serde_json::to_string(&profile).expect("serialize");
    let back: UserProfile = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, profile);
}
