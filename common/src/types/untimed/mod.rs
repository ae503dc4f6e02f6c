pub mod attitude;
pub mod xyz;

pub use attitude::Attitude;
pub use xyz::XYZ;
