use super::*;

#[test]
fn sign_in_href_returns_to_origin() {
    let guard = RouteGuard::default();
    assert_eq!(sign_in_href(&guard, Some("/game")), "/auth/github?return_to=%2Fgame");
}

#[test]
fn sign_in_href_defaults_to_home() {
    let guard = RouteGuard::default();
    assert_eq!(sign_in_href(&guard, None), "/auth/github?return_to=%2Fgame");
}

#[test]
fn sign_in_href_rejects_offsite_origin() {
    let guard = RouteGuard::default();
    assert_eq!(sign_in_href(&guard, Some("https://evil.test")), "/auth/github?return_to=%2Fgame");
    assert_eq!(sign_in_href(&guard, Some("//evil.test")), "/auth/github?return_to=%2Fgame");
    assert_eq!(sign_in_href(&guard, Some("/\t/evil.test")), "/auth/github?return_to=%2Fgame");
    assert_eq!(sign_in_href(&guard, Some("/\r\n/evil.test")), "/auth/github?return_to=%2Fgame");
}
