pub mod orders;
pub mod request;
