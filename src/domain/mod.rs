pub mod calendar;
pub mod date_format;
pub mod date_range;
pub mod picker;
pub mod predefined_range;
pub mod selection;
pub mod weekends;

pub use calendar::*;
pub use date_format::*;
pub use date_range::*;
pub use picker::*;
pub use predefined_range::*;
pub use selection::*;
pub use weekends::*;
