pub mod controller;
pub mod error;
pub mod hooks;
pub mod step;
