pub mod chat;
pub mod curriculum_cmd;
pub mod onboard;
