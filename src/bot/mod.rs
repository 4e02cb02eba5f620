//! Chat bot webhook surface

pub mod connector;
pub mod handlers;
pub mod routes;
pub mod state;

pub use connector::{ChannelConnector, HttpConnector};
pub use routes::create_router;
pub use state::BotState;
