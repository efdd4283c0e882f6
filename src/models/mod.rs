pub mod money;
pub mod report;
pub mod status;

pub use money::*;
pub use report::*;
pub use status::*;
