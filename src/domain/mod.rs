pub mod activity;
pub mod message_group;
pub mod request;
