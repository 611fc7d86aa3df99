pub mod administrator;

pub use administrator::Administrator;
