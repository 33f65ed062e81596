pub mod blog;
pub mod contact;
pub mod item;
pub mod locale;
pub mod project;
pub mod quote;
pub mod review;
pub mod search;
pub mod service;
pub mod sitemap;
pub mod tent;
