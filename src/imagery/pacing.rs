// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pacing for sequential image calls
//!
//! One permit per `delay`, burst of one, owned by a single request. The first
//! call goes out immediately and every following call waits until `delay`
//! has passed since the previous one.

use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovRateLimiter};

/// Per-request pacer for image backend calls
pub struct ImageCallPacer {
    limiter: Option<GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    delay: Duration,
}

impl ImageCallPacer {
    /// A zero delay disables pacing
    pub fn new(delay: Duration) -> Self {
        let limiter = Quota::with_period(delay).map(GovRateLimiter::direct);
        Self { limiter, delay }
    }

    /// Wait until the next call may be made
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
