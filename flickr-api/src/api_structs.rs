use serde::{Deserialize, Serialize};

/// REST method identifiers understood by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiMethod {
    #[serde(rename = "flickr.photos.search")]
    Search,
    #[serde(rename = "flickr.photos.getSizes")]
    GetSizes,
}

/// Response serialization requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseFormat {
    #[serde(rename = "json")]
    Json,
}

/// Extra photo attributes the API can attach to each search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhotoExtra {
    #[serde(rename = "url_sq")]
    Square,
    #[serde(rename = "url_q")]
    LargeSquare,
    #[serde(rename = "url_t")]
    Thumbnail,
    #[serde(rename = "url_s")]
    Small,
    #[serde(rename = "url_n")]
    Small320,
    #[serde(rename = "url_m")]
    Medium,
    #[serde(rename = "url_z")]
    Medium640,
    #[serde(rename = "url_c")]
    Medium800,
    #[serde(rename = "url_l")]
    Large,
    #[serde(rename = "url_o")]
    Original,
    #[serde(rename = "owner_name")]
    OwnerName,
}

/// Query parameters of the photo search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub method: ApiMethod,
    pub api_key: String,
    pub format: ResponseFormat,
    pub nojsoncallback: u8,
    pub text: String,
    pub per_page: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Vec<PhotoExtra>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub photos: PhotoPage,
    pub stat: String,
}

/// One page of search results. `total` is a string on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoPage {
    pub page: u32,
    pub pages: u32,
    pub perpage: u32,
    pub total: String,
    pub photo: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub id: String,
    pub owner: String,
    pub ownername: Option<String>,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub title: String,
    pub ispublic: u8,
    pub isfriend: u8,
    pub isfamily: u8,
    pub url_s: Option<String>,
    pub height_s: Option<u32>,
    pub width_s: Option<u32>,
    pub url_n: Option<String>,
    pub height_n: Option<u32>,
    pub width_n: Option<u32>,
}
