mod dashboard;
mod login;
mod profile;
mod settings;
mod transactions;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use settings::SettingsPage;
pub use transactions::TransactionsPage;
