pub mod r#box;
pub mod ellipsoid;
pub mod plane;

pub use ellipsoid::Ellipsoid;
pub use plane::Plane;
pub use r#box::Box;
