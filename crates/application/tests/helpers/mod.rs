mod mock_history_client;

pub use mock_history_client::MockHistoryClient;
