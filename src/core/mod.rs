//! Core commerce state engine

pub mod cart;
pub mod catalog;
pub mod error;
pub mod seed;
pub mod stock_editor;
pub mod wishlist;
