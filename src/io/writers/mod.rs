pub mod preview;
pub mod tables;
