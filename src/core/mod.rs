pub mod parser;
pub mod user_agent;
