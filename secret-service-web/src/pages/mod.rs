mod blog;
mod home;
mod members;
mod store;

pub use blog::BlogPage;
pub use home::HomePage;
pub use members::MembersPage;
pub use store::StorePage;
