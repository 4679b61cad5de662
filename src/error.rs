use {super::*, std::num::ParseIntError};

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to fetch {url}")]
  Fetch {
    source: reqwest::Error,
    url: String,
  },
  #[error("malformed vote count `{text}` on story `{title}`")]
  MalformedVoteText {
    source: ParseIntError,
    text: String,
    title: String,
  },
  #[error("failed to write {}", .path.display())]
  Write {
    path: PathBuf,
    source: rust_xlsxwriter::XlsxError,
  },
}
