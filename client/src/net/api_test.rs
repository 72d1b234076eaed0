use super::*;

#[test]
fn user_profile_endpoint_formats_expected_path() {
    assert_eq!(user_profile_endpoint("u123"), "/api/users/u123/profile");
}

#[test]
fn user_profile_endpoint_escapes_id() {
    assert_eq!(user_profile_endpoint("a/b c"), "/api/users/a%2Fb%20c/profile");
}

#[test]
fn sign_in_url_carries_return_location() {
    assert_eq!(sign_in_url("/game?seat=2"), "/auth/github?return_to=%2Fgame%3Fseat%3D2");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetches_resolve_to_none_without_browser() {
    assert_eq!(block_on_ready(fetch_current_user()), None);
    assert_eq!(block_on_ready(fetch_user_profile("u1")), None);
}

#[cfg(not(feature = "hydrate"))]
/// Poll a future that completes without ever awaiting I/O.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
