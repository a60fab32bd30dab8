//! Display order for timers

use crate::models::DerivedTimer;
use std::cmp::Ordering;

/// Not-ready timers first, soonest first; ready ones after, by label.
///
/// The sort is stable, so equal keys keep their derivation order.
pub fn sort_timers(timers: &mut [DerivedTimer]) {
    timers.sort_by(compare_timers);
}

fn compare_timers(a: &DerivedTimer, b: &DerivedTimer) -> Ordering {
    match (a.is_ready, b.is_ready) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.label.cmp(&b.label),
        (false, false) => a.remaining_millis.cmp(&b.remaining_millis),
    }
}
