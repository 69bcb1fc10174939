mod delete_photo;
mod upload_photo;

pub use delete_photo::delete_photo_handler;
pub use upload_photo::upload_photo_handler;
