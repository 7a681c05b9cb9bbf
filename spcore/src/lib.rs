pub mod asset;
pub mod content;
pub mod copy;
pub mod error;
pub mod page;
pub mod reveal;
