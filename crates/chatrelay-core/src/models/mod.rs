pub mod chat;
pub mod cost;
pub mod log_record;
pub mod token_count;
