use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) output_path: PathBuf,
  pub(crate) pages: Vec<String>,
  pub(crate) request_timeout: Duration,
  pub(crate) sheet_name: String,
  pub(crate) vote_threshold: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: Self::BASE_URL.to_string(),
      output_path: PathBuf::from(Self::OUTPUT_FILE),
      pages: Self::PAGES.iter().map(|page| (*page).to_string()).collect(),
      request_timeout: Duration::from_secs(30),
      sheet_name: Self::SHEET_NAME.to_string(),
      vote_threshold: 99,
    }
  }
}

impl Config {
  const BASE_URL: &str = "https://news.ycombinator.com/";

  const OUTPUT_FILE: &str = "Hacker News.xlsx";

  const PAGES: [&str; 2] = [
    "https://news.ycombinator.com/news",
    "https://news.ycombinator.com/news?p=2",
  ];

  const SHEET_NAME: &str = "Top News";
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_targets_the_first_two_listing_pages() {
    let config = Config::default();

    assert_eq!(
      config.pages,
      vec![
        "https://news.ycombinator.com/news".to_string(),
        "https://news.ycombinator.com/news?p=2".to_string(),
      ]
    );

    assert_eq!(config.base_url, "https://news.ycombinator.com/");
    assert_eq!(config.output_path, PathBuf::from("Hacker News.xlsx"));
    assert_eq!(config.sheet_name, "Top News");
    assert_eq!(config.vote_threshold, 99);
  }
}
