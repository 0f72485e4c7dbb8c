pub mod error;
pub mod overbooking;
pub mod roi;
