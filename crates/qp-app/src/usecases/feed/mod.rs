pub mod fetch_feed;

pub use fetch_feed::FetchFeed;
