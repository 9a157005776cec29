//! Small runtime helpers shared by components

/// Sleep that works on both wasm and native targets. Drives the alert
/// auto-dismiss, the tooltip show delay, and the post-restart reload delay.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
