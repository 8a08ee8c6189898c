//! Core protocol constants shared by every codec component.

pub mod constants;
