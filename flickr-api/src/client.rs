use fetchkit_core::{Contract, Fetcher, Method, NoParameters, Result, Transport};

use crate::api_structs::{ApiMethod, PhotoExtra, ResponseFormat, SearchQuery, SearchResponse};

/// Production API host.
pub const DEFAULT_HOST: &str = "https://api.flickr.com";

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 50;

// Every REST method is served from this path under the host.
const REST_PATH: &str = "services/rest";

/// Typed client for the photo search API, generic over the transport.
///
/// One contract is built at construction and reused across calls; the
/// client holds no other state, so it can be shared freely.
#[derive(Clone)]
pub struct FlickrClient<T: Transport> {
    fetcher: Fetcher<T>,
    contract: Contract,
    api_key: String,
}

impl<T: Transport> FlickrClient<T> {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>, transport: T) -> Self {
        Self {
            fetcher: Fetcher::new(transport),
            contract: Contract::new(host, Method::Get),
            api_key: api_key.into(),
        }
    }

    /// Search photos matching `text`, one result page per call.
    ///
    /// Pagination stays with the caller: pass an increasing `page` to
    /// walk the result set.
    pub async fn search(
        &self,
        text: impl Into<String>,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResponse> {
        let text = text.into();
        log::debug!("search: text={text} page={page} per_page={per_page}");
        let query = SearchQuery {
            method: ApiMethod::Search,
            api_key: self.api_key.clone(),
            format: ResponseFormat::Json,
            nojsoncallback: 1,
            text,
            per_page,
            page,
            extras: Some(vec![
                PhotoExtra::Small320,
                PhotoExtra::Small,
                PhotoExtra::OwnerName,
            ]),
        };
        self.fetcher
            .fetch(
                &self.contract,
                REST_PATH,
                Some(&query),
                None::<&NoParameters>,
                None::<&NoParameters>,
            )
            .await
    }

    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }
}
