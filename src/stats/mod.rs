pub mod histogram;
pub mod record;
pub mod store;
pub mod streak;

pub use histogram::{DistributionBar, distribution, win_rate};
pub use record::StatsRecord;
pub use store::{load, load_for_day, save, stats_path};
pub use streak::apply_streak_policy;
