// src/site/mod.rs

pub mod content;
pub mod pages;
pub mod svg;
