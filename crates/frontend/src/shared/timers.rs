use gloo_timers::future::TimeoutFuture;

/// Wall-clock time in milliseconds
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Sleeps until `now_ms() >= due_at_ms`. Re-arms when the browser wakes the
/// timer a little early.
pub async fn sleep_until(due_at_ms: u64) {
    loop {
        let now = now_ms();
        if now >= due_at_ms {
            break;
        }
        let remaining = (due_at_ms - now).min(u32::MAX as u64) as u32;
        TimeoutFuture::new(remaining).await;
    }
}
