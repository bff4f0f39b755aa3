pub mod aggregate;
pub mod nearby;
