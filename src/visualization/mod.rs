pub mod dashboard;
pub mod report;

pub use dashboard::*;
pub use report::*;
