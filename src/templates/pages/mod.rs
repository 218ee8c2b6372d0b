pub mod dashboard;
pub mod detail;
pub mod error;
pub mod load_error;

pub use dashboard::{dashboard_page, DashboardVm, Notice};
pub use detail::detail_page;
pub use error::error_page;
pub use load_error::load_error_page;
