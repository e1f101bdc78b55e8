pub mod config;
pub mod engine;
pub mod llm;
pub mod network;
pub mod ops;
pub mod persistence;
pub mod pipeline;
pub mod refinery;
