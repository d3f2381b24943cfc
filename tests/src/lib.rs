#![cfg(test)]

mod input;
mod sweep;
mod utils;
