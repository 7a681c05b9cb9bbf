pub mod action;
pub mod check;
pub mod find;
pub mod world;
