pub mod admin;
pub mod dashboard;
pub mod home;
pub mod lecturer;
pub mod lists;
pub mod profile;
pub mod student;
