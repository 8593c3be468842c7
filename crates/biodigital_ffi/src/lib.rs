//! FFI crate exposing the Biobío Digital core to the mobile shell.

pub mod api;
