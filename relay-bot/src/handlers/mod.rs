//! Handler implementations: logging, bot filter, relay dispatcher.

mod bot_filter;
mod logging;
mod relay_handler;

pub use bot_filter::BotFilterHandler;
pub use logging::LoggingHandler;
pub use relay_handler::{RelayHandler, Route};

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::Handler;

    #[test]
    fn test_handler_names_for_chain_logs() {
        assert_eq!(LoggingHandler.name(), "logging");
        assert_eq!(BotFilterHandler.name(), "bot_filter");
    }
}
