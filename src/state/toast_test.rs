use super::*;

#[test]
fn empty_queue_by_default() {
    let state = ToastState::default();
    assert!(state.items().is_empty());
}

#[test]
fn push_assigns_increasing_ids_and_keeps_order() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "one");
    let second = state.push(ToastLevel::Error, "two");
    assert!(second > first);
    let messages: Vec<&str> = state.items().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["one", "two"]);
}

#[test]
fn dismiss_removes_only_the_target_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "keep");
    let second = state.push(ToastLevel::Error, "drop");
    state.dismiss(second);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, first);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "stays");
    state.dismiss(99);
    assert_eq!(state.items().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "a");
    state.dismiss(first);
    let second = state.push(ToastLevel::Success, "b");
    assert!(second > first);
}
