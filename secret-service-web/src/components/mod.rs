pub(crate) mod header_nav_item;
pub(crate) mod login_form;
pub(crate) mod logout_button;

pub use login_form::LoginForm;
pub use logout_button::LogoutButton;
