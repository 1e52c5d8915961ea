mod showcase;
mod trend_indicator;

pub use showcase::Showcase;
pub use trend_indicator::{TrendIndicator, TrendIndicatorProps};
