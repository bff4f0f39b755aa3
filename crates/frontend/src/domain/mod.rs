pub mod a001_admin;
pub mod a002_category;
pub mod a003_subcategory;
pub mod a004_provider;
pub mod a005_user;
pub mod a006_order;
pub mod a007_payment;
pub mod a008_product;
pub mod a009_service;
