#![cfg(not(feature = "hydrate"))]

use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[test]
fn resolve_auth_without_browser_is_resolved_anonymous() {
    let state = block_on_ready(resolve_auth());
    assert_eq!(state, AuthState::anonymous());
    assert!(!state.loading);
}

#[test]
fn sign_out_publishes_anonymous_state() {
    let auth = RwSignal::new(AuthState::loading());
    sign_out(auth);
    assert_eq!(auth.get_untracked(), AuthState::anonymous());
}
