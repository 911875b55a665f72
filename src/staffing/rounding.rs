//! Top-down rounding with carried remainder.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::LEVEL_COUNT;

/// Slack when comparing a rounding remainder against the carry.
///
/// Keeps remainders that are equal in exact arithmetic (e.g. 3.4 - 3 and
/// 2 - 1.6) from tipping a level over on floating-point noise.
pub const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Splits `total_headcount` over proficiency levels in proportion to work.
///
/// For each level from highest to lowest,
/// `raw = work[i] / total_work * total_headcount` is rounded to the nearest
/// integer and the difference is settled against a carry of seats already
/// handed out beyond `raw`. If the part lost by rounding down exceeds the
/// carry, the level gets one more seat and the carry grows by what was
/// added; otherwise the carry absorbs the difference. The carry only ever
/// adds a seat relative to plain rounding, and the highest level is rounded
/// first against an empty carry, so it always receives at least `ceil(raw)`.
///
/// Round-ups at several levels can stack past `total_headcount + 1` (e.g.
/// `[1.0; 4]` over 6 seats gives 2 at every level). Only in that case the
/// split is redone with a give-back pass, which lets a level
/// return a seat once the carry covers a whole one; its counts sum to
/// exactly `total_headcount`.
///
/// Returns level → count for levels with a positive count. When
/// `total_work` is the sum of `per_level_work` and both it and
/// `total_headcount` are positive, the counts sum to `total_headcount` or
/// `total_headcount + 1`.
///
/// # Example
///
/// ```
/// use u_staffing::staffing::round_staffing;
///
/// let counts = round_staffing(&[0.0, 0.0, 3.4, 1.6], 5.0, 5);
/// assert_eq!(counts.get(&3), Some(&2));
/// assert_eq!(counts.get(&2), Some(&3));
/// assert_eq!(counts.values().sum::<u32>(), 5);
/// ```
pub fn round_staffing(
    per_level_work: &[f64; LEVEL_COUNT],
    total_work: f64,
    total_headcount: u32,
) -> BTreeMap<u8, u32> {
    let counts = carry_round(per_level_work, total_work, total_headcount, false);
    let assigned: u64 = counts.values().map(|&c| u64::from(c)).sum();
    if assigned <= u64::from(total_headcount) + 1 {
        return counts;
    }

    debug!(
        assigned,
        total_headcount, "staffing round-ups overshoot, giving seats back"
    );
    carry_round(per_level_work, total_work, total_headcount, true)
}

/// One top-down rounding pass.
///
/// With `give_back`, a level whose carry (after settling its own remainder)
/// reaches a whole seat hands one seat back instead of carrying it on.
fn carry_round(
    per_level_work: &[f64; LEVEL_COUNT],
    total_work: f64,
    total_headcount: u32,
    give_back: bool,
) -> BTreeMap<u8, u32> {
    let mut counts = BTreeMap::new();
    let mut carry = 0.0;

    for level in (0..LEVEL_COUNT).rev() {
        let raw = if total_work > 0.0 {
            per_level_work[level] / total_work * f64::from(total_headcount)
        } else {
            0.0
        };
        let mut count = raw.round();
        let diff = raw - count;

        if diff > carry + ROUNDING_TOLERANCE {
            carry += 1.0 - diff;
            count += 1.0;
        } else if give_back && count > 0.0 && carry - diff >= 1.0 - ROUNDING_TOLERANCE {
            carry -= diff + 1.0;
            count -= 1.0;
        } else {
            carry -= diff;
        }

        if count > 0.0 {
            counts.insert(level as u8, count as u32);
        }
    }

    counts
}
