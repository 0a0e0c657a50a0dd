//! Aggregate queries over a [`StatsRecord`] for the stats menu.

use super::record::StatsRecord;

/// One row of the guess distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionBar {
    /// Guess count this bar counts wins for (1-based).
    pub guesses: u32,
    pub count: usize,
    /// Bar width in display units, between the minimum and maximum widths.
    pub width: u16,
    /// The most recent game was won in this many guesses.
    pub highlighted: bool,
}

/// Percentage of played games that were won, rounded down.
///
/// `None` when no games have been played.
pub fn win_rate(record: &StatsRecord, max_guesses: u32) -> Option<u32> {
    if record.games_played == 0 {
        return None;
    }
    let wins = record
        .guess_counts
        .iter()
        .filter(|&&count| count <= max_guesses)
        .count() as u64;
    Some((wins * 100 / u64::from(record.games_played)) as u32)
}

/// Build one bar per guess count `1..=max_guesses`.
///
/// The fullest bucket gets `max_width`; the others scale proportionally from
/// `min_width`, which every bar has even when its count is zero.
pub fn distribution(
    record: &StatsRecord,
    max_guesses: u32,
    min_width: u16,
    max_width: u16,
) -> Vec<DistributionBar> {
    let counts: Vec<usize> = (1..=max_guesses)
        .map(|k| record.guess_counts.iter().filter(|&&c| c == k).count())
        .collect();
    let highest = counts.iter().copied().max().unwrap_or(0);
    let span = usize::from(max_width.saturating_sub(min_width));

    let recent_win = record
        .guess_counts
        .last()
        .copied()
        .filter(|&count| count <= max_guesses);

    (1..=max_guesses)
        .zip(counts)
        .map(|(guesses, count)| {
            let extra = if highest > 0 { span * count / highest } else { 0 };
            DistributionBar {
                guesses,
                count,
                width: min_width.saturating_add(extra as u16).min(max_width.max(min_width)),
                highlighted: recent_win == Some(guesses),
            }
        })
        .collect()
}
