pub mod assignment;
pub mod cost;
pub mod headway;
pub mod journey;
pub mod network;
