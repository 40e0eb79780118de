pub mod api_structs;

mod client;

pub use api_structs::{
    ApiMethod, Photo, PhotoExtra, PhotoPage, ResponseFormat, SearchQuery, SearchResponse,
};
pub use client::{FlickrClient, DEFAULT_HOST, DEFAULT_PER_PAGE};
