pub mod activity;
pub mod message;
