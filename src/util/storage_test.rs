use super::*;

#[test]
fn get_returns_none_for_missing_key() {
    assert_eq!(get("no_such_key"), None);
}

#[test]
fn set_then_get_round_trips() {
    set(ACCESS_TOKEN, "tok-1");
    assert_eq!(get(ACCESS_TOKEN), Some("tok-1".to_owned()));
}

#[test]
fn set_overwrites_previous_value() {
    set(REFRESH_TOKEN, "old");
    set(REFRESH_TOKEN, "new");
    assert_eq!(get(REFRESH_TOKEN), Some("new".to_owned()));
}

#[test]
fn remove_deletes_the_value() {
    set(SESSION_SNAPSHOT, "{}");
    remove(SESSION_SNAPSHOT);
    assert_eq!(get(SESSION_SNAPSHOT), None);
}

#[test]
fn remove_of_missing_key_is_a_no_op() {
    remove("never_set");
    assert_eq!(get("never_set"), None);
}
