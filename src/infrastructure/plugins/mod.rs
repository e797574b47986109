pub mod console_reporter;
pub mod simple_logger;

pub use console_reporter::*;
pub use simple_logger::*;
