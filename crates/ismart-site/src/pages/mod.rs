//! Storefront pages

mod about;
mod category;
mod contact;
mod help;
mod home;
mod journal;
mod login;
mod not_found;
mod report;

pub use about::AboutPage;
pub use category::CategoryPage;
pub use contact::ContactPage;
pub use help::HelpPage;
pub use home::HomePage;
pub use journal::JournalPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use report::ReportPage;
