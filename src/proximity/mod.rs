mod distance;
mod format;
mod nearby;
mod sort;

pub use distance::calculate_distance;
pub use format::format_distance;
pub use nearby::nearby;
pub use sort::{SortByDistance, WithDistance, sort_by_distance};
