pub mod categories;
pub mod list;
pub mod map;
