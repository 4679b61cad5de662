use super::*;

/// Extracts and ranks stories from already fetched pages without touching
/// the network or the filesystem.
pub(crate) fn rank_pages(pages: &[Page], threshold: u32) -> Result<Vec<Story>> {
  let mut rows = Vec::new();

  for page in pages {
    let extracted = extract::extract_rows(&page.body)
      .with_context(|| format!("could not read stories from {}", page.url))?;

    debug!(url = %page.url, stories = extracted.len(), "extracted stories");

    rows.extend(extracted);
  }

  rank::rank(rows, threshold)
}

pub(crate) async fn run(config: &Config) -> Result<Vec<Story>> {
  let client = Client::new(config.request_timeout)?;

  let pages = client.fetch_pages(&config.pages).await?;

  let stories = rank_pages(&pages, config.vote_threshold)?;

  let exporter = Exporter::new(config);

  exporter.save(&stories).with_context(|| {
    format!("could not export to {}", exporter.output_path().display())
  })?;

  Ok(stories)
}
