use super::*;
use crate::state::ui::NoticeKind;

#[test]
fn status_change_failure_names_the_item() {
    let err = ApiError::Status { status: 400, message: "Item already served".to_owned() };
    assert_eq!(status_change_failure(42, &err), "Could not update order item #42: Item already served");
}

#[test]
fn status_change_failure_survives_the_follow_up_refetch() {
    let mut board = OrdersState::default();
    let mut ui = UiState::default();
    board.set_orders(Vec::new());

    let err = ApiError::Conflict("Order item is locked".to_owned());
    ui.error(status_change_failure(7, &err));
    board.set_orders(Vec::new());

    let notice = ui.notice.expect("failure stays on the banner");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("Order item is locked"));
    assert_eq!(board.error, None);
}
