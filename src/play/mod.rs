pub mod navigate;
pub mod viewport;
