use super::{ConfigError, RateLimitConfig, RateLimiter};
use log::debug;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Token bucket admission decision
///
/// Refills at `max_qps` tokens per second up to `burst` tokens. Each admitted
/// call takes one token; when the bucket is empty the call is denied right
/// away, nothing ever waits for a refill.
pub struct TokenBucketRateLimiter {
    rate: f64,
    burst: f64,
    state: Mutex<BucketState>,
}

struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucketRateLimiter {
    /// Create a limiter with a full bucket
    pub fn new(config: &RateLimitConfig) -> Result<Self, ConfigError> {
        Self::new_at(config, Instant::now())
    }

    /// Create a limiter whose clock starts at `now`
    pub fn new_at(config: &RateLimitConfig, now: Instant) -> Result<Self, ConfigError> {
        config.validate()?;

        debug!(
            "persistence token bucket: {} qps, burst {}",
            config.max_qps, config.burst
        );

        let burst = f64::from(config.burst);
        Ok(Self {
            rate: config.max_qps,
            burst,
            state: Mutex::new(BucketState {
                tokens: burst,
                last_refill: now,
            }),
        })
    }

    /// Admission decision against an explicit clock reading
    ///
    /// Readings older than the last one are treated as no time elapsed.
    pub fn allow_at(&self, now: Instant) -> bool {
        // A poisoned bucket still holds a consistent token count.
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let elapsed = now.saturating_duration_since(state.last_refill);
        state.tokens = replenish(state.tokens, elapsed, self.rate, self.burst);
        if now > state.last_refill {
            state.last_refill = now;
        }

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn burst(&self) -> u32 {
        self.burst as u32
    }
}

impl RateLimiter for TokenBucketRateLimiter {
    fn allow(&self) -> bool {
        self.allow_at(Instant::now())
    }
}

/// Tokens available after `elapsed` at `rate` tokens/second, capped at `capacity`.
fn replenish(tokens: f64, elapsed: Duration, rate: f64, capacity: f64) -> f64 {
    (tokens + elapsed.as_secs_f64() * rate).min(capacity)
}
