#![deny(warnings)]

pub mod consts;
pub mod testing;
pub mod trig;
