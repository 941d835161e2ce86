pub mod arithmetic;
pub mod chatbot;
pub mod classifier;
pub mod completion;
pub mod metrics_manager;
pub mod templates;
pub mod units;
