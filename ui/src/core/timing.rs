//! Timer helpers that work on both wasm and native targets.

/// Sleep for `ms` milliseconds on whichever executor hosts the app.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let clamped = ms.min(u32::MAX as u64) as u32;
        gloo_timers::future::TimeoutFuture::new(clamped).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}
