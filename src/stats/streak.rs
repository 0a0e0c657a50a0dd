//! Day rules applied to a freshly loaded record.

use tracing::debug;

use super::record::StatsRecord;
use crate::day::DayIndex;

/// Bring a loaded record up to date for `today`.
///
/// The streak survives only if the last win was today or yesterday, the
/// historical maximum is repaired if it fell behind, and a board left over
/// from an earlier day is discarded. Applying it twice on the same day is a
/// no-op.
pub fn apply_streak_policy(record: &mut StatsRecord, today: DayIndex) {
    if record.last_won != today && record.last_won != today - 1 {
        if record.streak > 0 {
            debug!(
                "Streak of {} broken: last win on day {}, today is {}",
                record.streak, record.last_won, today
            );
        }
        record.streak = 0;
    }

    if record.streak > record.max_streak {
        record.max_streak = record.streak;
    }

    if record.last_played != today {
        record.board_state.clear();
    }
}
