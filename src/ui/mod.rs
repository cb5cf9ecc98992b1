mod progress;
mod style;

pub use progress::CellProgress;
pub use style::Style;
