//! Page modules

pub mod connect;
pub mod dashboard;
pub mod home;

pub use connect::ConnectPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
