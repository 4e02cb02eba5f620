pub mod cards;
pub mod commands;
pub mod fallback;
pub mod providers;
pub mod recommender;
pub mod slate_builder;

pub use commands::RecBot;
pub use providers::{HttpRecommenderClient, RecommenderClient};
