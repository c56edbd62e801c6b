use bytes::Bytes;
use reqwest::Client;

// Shared client for every download. No timeout and no retry: a slow host
// holds the request open for as long as the network stack allows.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder().build()
}

// Fetches the document at `url` and returns the body as-is.
//
// The upstream status is logged but not checked, so an error page or an
// empty body is returned like any other payload.
pub async fn fetch_document(client: &Client, url: &str) -> reqwest::Result<Bytes> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    tracing::debug!(%url, %status, bytes = body.len(), "downloaded document");
    if !status.is_success() {
        tracing::warn!(%url, %status, "upstream returned a non-success status, keeping body anyway");
    }

    Ok(body)
}
