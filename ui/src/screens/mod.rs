// This file makes the screen modules available to the rest of the application.

pub mod about;
pub mod dashboard;
pub mod home;
pub mod legal;
pub mod not_found;
