use super::*;

#[test]
fn notice_for_shows_registration_notice_when_flag_present() {
    assert_eq!(notice_for(Some("1")), Some(REGISTERED_NOTICE));
}

#[test]
fn notice_for_ignores_missing_or_blank_flag() {
    assert_eq!(notice_for(None), None);
    assert_eq!(notice_for(Some("")), None);
}

#[test]
fn registered_redirect_targets_login_with_flag() {
    let target = registered_redirect();
    assert!(target.starts_with("/login?"));
    assert!(target.contains(REGISTERED_FLAG));
}
