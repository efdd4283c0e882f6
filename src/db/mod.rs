pub mod connection;
pub mod schema;
pub mod organizations;
pub mod employees;
pub mod enrollments;
pub mod claims;

pub use connection::Database;
pub use organizations::organization_exists;
