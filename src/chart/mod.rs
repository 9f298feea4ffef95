pub mod aggregate;
pub mod bucket;
pub mod goal;
