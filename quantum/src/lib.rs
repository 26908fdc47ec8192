pub mod units;
pub mod utility;

#[cfg(feature = "faer")]
pub mod operator;

#[cfg(feature = "spins")]
pub mod spins;

#[cfg(feature = "spins")]
pub extern crate clebsch_gordan;
