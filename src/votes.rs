use super::*;

const SUFFIXES: [&str; 2] = [" points", " point"];

/// Parses listing vote text such as `150 points` or `1 point`.
///
/// Anything else left after the unit is removed must be a plain integer,
/// so `1,234 points` is rejected rather than guessed at.
pub(crate) fn parse_votes(text: &str, title: &str) -> Result<u32, Error> {
  let trimmed = text.trim();

  let count = SUFFIXES
    .iter()
    .find_map(|suffix| trimmed.strip_suffix(suffix))
    .unwrap_or(trimmed);

  count
    .parse::<u32>()
    .map_err(|source| Error::MalformedVoteText {
      source,
      text: text.to_string(),
      title: title.to_string(),
    })
}
