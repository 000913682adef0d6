mod dashboard;
mod logout;
mod tips;

pub use dashboard::admin_dashboard;
pub use logout::log_out;
pub use tips::*;
