pub mod image_host_client;

pub use image_host_client::{ImageHostClient, ImageHostConfig};
