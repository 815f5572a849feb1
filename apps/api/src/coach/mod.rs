pub mod chat;
pub mod features;
pub mod handlers;
pub mod interview;
pub mod keywords;
pub mod learning_path;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod prompts;
pub mod recommender;
pub mod requests;
pub mod resume;
pub mod roadmap;
pub mod validation;
