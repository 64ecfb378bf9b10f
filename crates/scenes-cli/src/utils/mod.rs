pub mod progress;
pub mod validate;
