#![no_std]

pub mod sensor_input;
pub mod time_wrapper;
