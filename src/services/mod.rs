pub mod activity_service;
pub mod avatar_service;
pub mod health_service;
pub mod message_group_service;
