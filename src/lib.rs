#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
pub mod liber8tion;
pub mod rainbow;
pub mod spectrum;
pub mod prelude;
