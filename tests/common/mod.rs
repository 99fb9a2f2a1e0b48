#![allow(dead_code)]

pub mod hashers;
pub mod logger;
