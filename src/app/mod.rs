pub mod host;
pub mod landing;
pub mod state;
