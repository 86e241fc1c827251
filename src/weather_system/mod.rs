pub mod forecast;
pub mod profile;
