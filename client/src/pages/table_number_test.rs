use super::*;

#[test]
fn taken_table_reads_as_taken() {
    let err = ApiError::Conflict("Your input table number is currently in use.".to_owned());
    assert_eq!(claim_error(&err), "Sorry but that table is taken.");
}

#[test]
fn missing_table_is_explained() {
    assert_eq!(
        claim_error(&ApiError::NotFound(String::new())),
        "That table does not exist at this restaurant."
    );
}

#[test]
fn other_errors_fall_through() {
    let err = ApiError::Network("down".to_owned());
    assert_eq!(claim_error(&err), err.user_message());
}
