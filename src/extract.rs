use super::*;

const CONTAINER: &str = "tr.athing";

const METADATA: &str = ".subtext";

const SCORE: &str = ".score";

const TITLE_LINK: &str = ".titleline > a, a.titlelink";

struct Selectors {
  container: Selector,
  metadata: Selector,
  score: Selector,
  title_link: Selector,
}

impl Selectors {
  fn new() -> Result<Self> {
    Ok(Self {
      container: selector(CONTAINER)?,
      metadata: selector(METADATA)?,
      score: selector(SCORE)?,
      title_link: selector(TITLE_LINK)?,
    })
  }
}

fn element_text(element: ElementRef) -> String {
  element.text().collect::<String>().trim().to_string()
}

/// Finds every story on a listing page, in document order.
///
/// Each story is read from its own container row and the metadata row that
/// immediately follows it, so a story without metadata can never pick up a
/// neighbour's vote count.
pub(crate) fn extract_rows(html: &str) -> Result<Vec<StoryRow>> {
  let selectors = Selectors::new()?;

  let document = Html::parse_document(html);

  let mut rows = Vec::new();

  for container in document.select(&selectors.container) {
    let Some(anchor) = container.select(&selectors.title_link).next() else {
      warn!(
        id = container.value().attr("id").unwrap_or_default(),
        "skipping story row without a title link"
      );
      continue;
    };

    let metadata = container
      .next_siblings()
      .find_map(ElementRef::wrap)
      .and_then(|row| row.select(&selectors.metadata).next());

    let vote_text = metadata
      .and_then(|metadata| metadata.select(&selectors.score).next())
      .map(element_text);

    rows.push(StoryRow {
      link: anchor.value().attr("href").map(str::to_string),
      title: element_text(anchor),
      vote_text,
    });
  }

  Ok(rows)
}

fn selector(source: &'static str) -> Result<Selector> {
  Selector::parse(source)
    .map_err(|error| anyhow::anyhow!("invalid selector `{source}`: {error}"))
}
