pub mod blog;
pub mod catalog;
pub mod configurator;
pub mod contact;
pub mod items;
pub mod metrics;
pub mod search;
pub mod sitemap;
pub mod slug;
pub mod tents;
