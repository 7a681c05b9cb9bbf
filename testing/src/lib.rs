pub mod clipboard;
pub mod timer;
pub mod viewport;
