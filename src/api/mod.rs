use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

/// Some deployments return collections bare, others wrap them in an
/// object under a `data` key. Both normalize to the inner value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ApiEnvelope<T> {
    fn into_inner(self) -> T {
        match self {
            ApiEnvelope::Wrapped { data } => data,
            ApiEnvelope::Bare(inner) => inner,
        }
    }
}

/// GET a JSON collection, failing on any non-success status, and
/// unwrap the optional envelope.
pub async fn fetch_collection<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<T>> {
    let payload: ApiEnvelope<Vec<T>> = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to reach {url}"))?
        .error_for_status()
        .with_context(|| format!("request failed for {url}"))?
        .json()
        .await
        .with_context(|| format!("invalid JSON payload from {url}"))?;

    Ok(payload.into_inner())
}
