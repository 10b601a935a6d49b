//! Concrete steps for the name, message, image and summary stages.

pub mod final_step;
pub mod image;
pub mod message;
pub mod name;
pub mod validators;

pub use final_step::FinalStep;
pub use image::ImageStep;
pub use message::MessageStep;
pub use name::NameStep;
