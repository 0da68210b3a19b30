use super::*;

#[test]
fn diners_fetch_anonymously_regardless_of_session() {
    assert_eq!(loader_auth(false, true, None), Some(Auth::Customer));
    assert_eq!(loader_auth(false, false, Some("staff".to_owned())), Some(Auth::Customer));
}

#[test]
fn managers_wait_for_session() {
    assert_eq!(loader_auth(true, true, Some("tok".to_owned())), None);
    assert_eq!(loader_auth(true, false, None), None);
}

#[test]
fn managers_fetch_with_their_token() {
    assert_eq!(loader_auth(true, false, Some("tok".to_owned())), Some(Auth::Staff("tok".to_owned())));
}
