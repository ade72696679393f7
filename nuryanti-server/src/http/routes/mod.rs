//! Route handlers organized by resource

pub mod content;
pub mod health;
pub mod register;
