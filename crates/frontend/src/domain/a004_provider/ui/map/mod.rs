pub mod browser;
pub mod controller;
pub mod model;
pub mod platform;
pub mod view;

pub use view::ProvidersMap;
