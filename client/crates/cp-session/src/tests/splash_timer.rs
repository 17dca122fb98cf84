use crate::SplashTimer;

use std::time::Duration;

use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn given_min_display_when_waited_then_fires_after_deadline() {
    // Given
    let start = Instant::now();
    let mut timer = SplashTimer::start(Duration::from_secs(4));
    assert!(!timer.is_done());

    // When
    timer.wait().await;

    // Then
    assert!(timer.is_done());
    assert_eq!(start.elapsed(), Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn given_fired_timer_when_waited_again_then_returns_immediately() {
    let mut timer = SplashTimer::start(Duration::from_secs(4));
    timer.wait().await;
    let after_first = Instant::now();

    timer.wait().await;

    assert_eq!(Instant::now(), after_first);
}

#[tokio::test]
async fn given_zero_display_when_started_then_already_done() {
    let timer = SplashTimer::start(Duration::ZERO);
    assert!(timer.is_done());
}
