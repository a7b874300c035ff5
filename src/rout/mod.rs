//! Main module for rout library functionality

pub mod catalog;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod testing;
pub mod token;
