pub mod registration;
pub mod schedule;
pub mod section;
pub mod time;

pub use registration::*;
pub use schedule::*;
pub use section::*;
pub use time::*;
