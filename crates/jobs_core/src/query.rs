use url::Url;

use crate::FilterState;

pub const AUTHORIZATION: &str = "Authorization";

const JOBS_SEGMENT: &str = "jobs";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid service url {url:?}: {message}")]
    InvalidUrl { url: String, message: String },
    #[error("service url {0:?} cannot carry a path")]
    NotHierarchical(String),
}

/// Fully resolved `.../jobs` URL of the listing service, validated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsEndpoint {
    url: Url,
}

impl JobsEndpoint {
    /// Resolves the jobs collection under `base_url`. Any query or fragment on
    /// the base is dropped.
    pub fn parse(base_url: &str) -> Result<Self, EndpointError> {
        let mut url = Url::parse(base_url.trim()).map_err(|err| EndpointError::InvalidUrl {
            url: base_url.to_string(),
            message: err.to_string(),
        })?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| EndpointError::NotHierarchical(base_url.to_string()))?
            .pop_if_empty()
            .push(JOBS_SEGMENT);
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

/// Everything the transport needs to issue one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of a decoded query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Composes the listing request for `filters`.
///
/// All three parameters are always present: an empty type segment and a zero
/// package are left for the service to read as "no filter". A missing token
/// still produces the header, with an empty credential.
pub fn build_request(
    endpoint: &JobsEndpoint,
    filters: &FilterState,
    token: Option<&str>,
) -> RequestDescriptor {
    let mut url = endpoint.url.clone();
    url.query_pairs_mut()
        .append_pair("employment_type", &filters.employment_type_segment())
        .append_pair("minimum_package", &filters.minimum_salary().to_string())
        .append_pair("search", filters.search_term());

    RequestDescriptor {
        method: Method::Get,
        url,
        headers: vec![(AUTHORIZATION, format!("Bearer {}", token.unwrap_or_default()))],
    }
}
