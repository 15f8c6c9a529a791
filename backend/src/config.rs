use anyhow::{Context, Result};
use common::catalog_config::{CatalogConfig, CatalogTitles};
use common::search_const::DEFAULT_HITS_PER_PAGE;

/// Search provider credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgoliaConfig {
    pub app_id: String,
    pub search_api_key: String,
    pub index_name: String,
    pub base_url: String,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub algolia: AlgoliaConfig,
    pub catalog: CatalogConfig,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{name} must be set"))
        };
        let flag = |name: &str| {
            lookup(name)
                .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(false)
        };

        let app_id = required("ALGOLIA_APP_ID")?;
        let algolia = AlgoliaConfig {
            base_url: lookup("ALGOLIA_URL").unwrap_or_else(|| format!("https://{app_id}-dsn.algolia.net")),
            search_api_key: required("ALGOLIA_SEARCH_API_KEY")?,
            index_name: required("ALGOLIA_INDEX_NAME")?,
            app_id,
        };

        let catalog = CatalogConfig {
            catalog_titles: CatalogTitles {
                a_la_carte: lookup("EDX_ENTERPRISE_ALACARTE_TITLE"),
                business: lookup("EDX_FOR_BUSINESS_TITLE"),
                education: lookup("EDX_FOR_ONLINE_EDU_TITLE"),
            },
            export_base_url: required("CATALOG_SERVICE_BASE_URL")?,
            card_view_enabled: flag("FEATURE_CARD_VIEW_ENABLED"),
            program_type_facet_enabled: flag("FEATURE_PROGRAM_TYPE_FACET"),
            hits_per_page: lookup("HITS_PER_PAGE")
                .map(|value| value.trim().parse::<u64>())
                .transpose()
                .context("HITS_PER_PAGE must be a valid number")?
                .unwrap_or(DEFAULT_HITS_PER_PAGE),
        };

        Ok(Self {
            algolia,
            catalog,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
