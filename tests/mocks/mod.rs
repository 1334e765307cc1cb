pub mod mock_price_source;

pub use mock_price_source::MockPriceSource;
