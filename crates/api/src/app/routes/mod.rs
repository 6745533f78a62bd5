pub mod replenishment;
pub mod system;
