pub mod country;
pub mod location;
pub mod response;
pub mod upstream;
