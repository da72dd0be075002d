#![allow(non_snake_case)]

mod core;
pub use self::core::*;
mod transpose;
mod assembly;
mod csr;
pub use csr::*;
mod csc;
pub use csc::*;
mod display;
