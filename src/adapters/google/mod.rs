pub mod geocoding;
pub mod places;
pub mod wire;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// One HTTP client shared by the geocoding, nearby-search and details calls.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleMapsClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `path` with `params` plus the API key, decoding the JSON body.
    /// Non-2xx statuses surface as `ApiError`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path);

        // 不把金鑰寫進日誌
        tracing::debug!("Making API request to: {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let body = response.error_for_status()?.json::<T>().await?;
        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::ports::ConfigProvider;

    pub struct MockConfig {
        base_url: String,
    }

    impl MockConfig {
        pub fn new(base_url: String) -> Self {
            Self { base_url }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_key(&self) -> &str {
            "test-key"
        }

        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }
    }
}
