mod fixture;
mod yahoo;

pub use fixture::StaticMarketData;
pub use yahoo::YahooAdapter;
