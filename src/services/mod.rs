pub mod country;
pub mod device;
pub mod parser;
