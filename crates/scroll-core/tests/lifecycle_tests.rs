// Host-side tests for animation loop cancellation.

use scroll_core::LoopHandle;

#[test]
fn new_handle_is_running() {
    assert!(!LoopHandle::default().is_cancelled());
}

#[test]
fn cancel_is_shared_between_clones() {
    let handle = LoopHandle::default();
    let in_loop = handle.clone();
    handle.cancel();
    assert!(in_loop.is_cancelled());
}

#[test]
fn back_forward_cache_hide_keeps_loop_running() {
    let handle = LoopHandle::default();
    assert!(!handle.on_page_hide(true));
    assert!(!handle.is_cancelled());
    // Hidden and restored repeatedly, still running.
    assert!(!handle.on_page_hide(true));
    assert!(!handle.clone().is_cancelled());
}

#[test]
fn teardown_hide_cancels_loop() {
    let handle = LoopHandle::default();
    let in_loop = handle.clone();
    assert!(handle.on_page_hide(false));
    assert!(in_loop.is_cancelled());
}

#[test]
fn cached_hide_after_stop_reports_nothing() {
    let handle = LoopHandle::default();
    handle.cancel();
    assert!(!handle.on_page_hide(true));
    assert!(handle.is_cancelled());
}
