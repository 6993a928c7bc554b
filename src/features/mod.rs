pub mod assignments;
pub mod auth;
pub mod employers;
pub mod layout;
pub mod offers;
pub mod recommendations;
pub mod settings;
