use std::path::PathBuf;

/// Which [`PropertyStore`](crate::store::PropertyStore) the runner reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    Memory,
    File(PathBuf),
    Http(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: ListingSource,
    /// JSON [`SearchRequest`](crate::search::SearchRequest) to run; default request when unset
    pub search_request_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let source = match get("LISTING_SOURCE")
            .unwrap_or_else(|| "memory".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => ListingSource::Memory,
            "file" => {
                let path = get("LISTINGS_PATH").ok_or_else(|| {
                    anyhow::anyhow!("LISTINGS_PATH is required when LISTING_SOURCE=file")
                })?;
                ListingSource::File(PathBuf::from(path))
            }
            "http" => {
                let url = get("LISTINGS_URL").ok_or_else(|| {
                    anyhow::anyhow!("LISTINGS_URL is required when LISTING_SOURCE=http")
                })?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("LISTINGS_URL must start with http:// or https://");
                }
                ListingSource::Http(url)
            }
            other => anyhow::bail!(
                "LISTING_SOURCE must be one of memory, file, http (got {:?})",
                other
            ),
        };

        let config = Self {
            source,
            search_request_path: get("SEARCH_REQUEST_PATH").map(PathBuf::from),
            output_path: get("OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("search_results.json")),
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Listing source: {:?}", config.source);
        tracing::debug!("Output path: {}", config.output_path.display());

        Ok(config)
    }
}
