#![allow(dead_code)]

pub mod clitests;
pub mod mockserver;
pub mod paths;
