use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  async fn fetch_page(&self, url: &str) -> Result<Page, Error> {
    let fetch_error = |source| Error::Fetch {
      source,
      url: url.to_string(),
    };

    let body = self
      .client
      .get(url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(fetch_error)?
      .text()
      .await
      .map_err(fetch_error)?;

    info!(url, bytes = body.len(), "fetched page");

    Ok(Page {
      body,
      url: url.to_string(),
    })
  }

  /// Fetches each page in turn, stopping at the first failure.
  pub(crate) async fn fetch_pages(&self, urls: &[String]) -> Result<Vec<Page>> {
    Ok(
      stream::iter(urls)
        .then(|url| self.fetch_page(url))
        .try_collect::<Vec<_>>()
        .await?,
    )
  }

  pub(crate) fn new(timeout: Duration) -> Result<Self> {
    Ok(Self {
      client: reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("could not build http client")?,
    })
  }
}
