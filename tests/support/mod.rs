#![allow(dead_code)]

pub mod architecture;
pub mod config;
pub mod fakes;
pub mod safe;
pub mod scene;
