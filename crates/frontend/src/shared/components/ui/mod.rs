pub mod badge;

pub use badge::{Badge, FlagBadge, OrderStatusBadge, PaymentStatusBadge};
