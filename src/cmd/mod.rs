pub mod check;
pub mod common;
pub mod interactive;
pub mod theme;
