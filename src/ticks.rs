//! Modular tick arithmetic for a 32-bit up-counter.
//!
//! The hardware counter counts through `[0, TOP_VALUE]` and wraps. Every
//! "is X sooner than Y" decision in this crate goes through [`dist`] so that
//! comparisons stay correct across the wraparound.

/// Number of distinct counter values (`2^32`).
pub const MODULUS: u64 = 1 << 32;

/// Largest counter value. Reaching it is the wraparound event.
pub const TOP_VALUE: u32 = u32::MAX;

/// Forward distance from `from` to `to`, i.e. `(to - from) mod MODULUS`.
///
/// `dist(x, x)` is 0: a value is never "ahead" of itself.
#[inline]
pub const fn dist(from: u32, to: u32) -> u32 {
    to.wrapping_sub(from)
}

/// Adds `ticks` to `base` modulo `MODULUS`.
#[inline]
pub const fn offset(base: u32, ticks: u32) -> u32 {
    base.wrapping_add(ticks)
}

/// Picks the upcoming compare target as seen from `now`.
///
/// Starts from the wraparound at `TOP_VALUE`; a candidate wins only when it is
/// strictly nearer and not equal to `now`. With `now == TOP_VALUE` the result
/// is always `TOP_VALUE`, so a due wraparound is never skipped.
pub fn nearest<I>(now: u32, candidates: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut target = TOP_VALUE;
    let mut best = dist(now, TOP_VALUE);

    for candidate in candidates {
        let d = dist(now, candidate);
        if d != 0 && d < best {
            best = d;
            target = candidate;
        }
    }

    target
}
