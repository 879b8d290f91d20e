pub mod powerline;
pub mod segment;
pub mod theme;
