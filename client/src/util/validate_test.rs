use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("chef@cafe.com"));
    assert!(is_valid_email("a.b@c.d.e"));
    assert!(is_valid_email("  padded@example.org "));
}

#[test]
fn email_rejects_missing_parts() {
    for raw in ["", "chef", "chef@", "@cafe.com", "chef@cafe", "chef@.com", "chef@cafe.", "a @b.c"] {
        assert!(!is_valid_email(raw), "expected rejection for {raw:?}");
    }
}

// =============================================================
// Password
// =============================================================

#[test]
fn strong_password_requires_every_class() {
    assert!(is_strong_password("Secret1!"));
    assert!(!is_strong_password("Secr1!"));
    assert!(!is_strong_password("secret1!"));
    assert!(!is_strong_password("SECRET1!"));
    assert!(!is_strong_password("Secretxx!"));
    assert!(!is_strong_password("Secret12"));
}

#[test]
fn password_rules_list_every_requirement() {
    assert_eq!(PASSWORD_RULES.len(), 5);
}

// =============================================================
// Menu item fields
// =============================================================

#[test]
fn parse_price_accepts_up_to_two_decimals() {
    assert_eq!(parse_price("9"), Ok(Price(900)));
    assert_eq!(parse_price("9.5"), Ok(Price(950)));
    assert_eq!(parse_price("9.95"), Ok(Price(995)));
}

#[test]
fn parse_price_rejects_zero_and_malformed() {
    for raw in ["0", "0.00", "9.999", "-1", "", "nine"] {
        assert!(parse_price(raw).is_err(), "expected rejection for {raw:?}");
    }
}

#[test]
fn parse_preparation_time_requires_positive_whole_minutes() {
    assert_eq!(parse_preparation_time(" 12 "), Ok(12));
    assert!(parse_preparation_time("0").is_err());
    assert!(parse_preparation_time("1.5").is_err());
    assert!(parse_preparation_time("-4").is_err());
}

#[test]
fn ids_must_be_non_negative() {
    assert!(is_valid_id(0));
    assert!(!is_valid_id(-1));
}

// =============================================================
// Account forms
// =============================================================

#[test]
fn account_form_reports_first_failing_rule() {
    assert_eq!(
        check_account_form("", "Secret1!", "Secret1!", &[]),
        Err("Please fill in all the fields.")
    );
    assert_eq!(
        check_account_form("m@r.co", "Secret1!", "Secret1!", &["Cafe", " "]),
        Err("Please fill in all the fields.")
    );
    assert_eq!(
        check_account_form("m@r.co", "Secret1!", "Secret2!", &[]),
        Err("Passwords are not the same!")
    );
    assert_eq!(check_account_form("mr.co", "Secret1!", "Secret1!", &[]), Err("Invalid email!"));
    assert_eq!(
        check_account_form("m@r.co", "secret", "secret", &[]),
        Err("Password doesn't fit the security requirements.")
    );
    assert_eq!(check_account_form("m@r.co", "Secret1!", "Secret1!", &["Cafe", "Sydney"]), Ok(()));
}

#[test]
fn sign_in_needs_both_fields_and_valid_email() {
    assert_eq!(check_sign_in("", "pw"), Err("Please fill in all the fields."));
    assert_eq!(check_sign_in("chef", "pw"), Err("Invalid email!"));
    assert_eq!(check_sign_in("chef@cafe.com", "pw"), Ok(()));
}
