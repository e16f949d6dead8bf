use serde::{Deserialize, Serialize};

/// One page of the directory response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub info: PageInfo,
}

/// Paging metadata echoed back by the directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub results: u32,
    #[serde(default)]
    pub page: u32,
}

/// Query string for a page request, e.g. `?page=2&results=20`.
pub fn page_query(page: u32, results: u32) -> String {
    format!("?page={page}&results={results}")
}
