pub mod amount;
pub mod message;
pub mod ports;
pub mod record;
pub mod request;
