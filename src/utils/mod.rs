//! Utility functions shared across the crate.

pub mod image;

pub use image::{load_image, load_images_batch, load_images_batch_with_threshold};
