use super::*;

/// A sheet row with its link already resolved to an absolute URL.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ExportRow {
  pub(crate) title: String,
  pub(crate) url: String,
  pub(crate) votes: u32,
}

impl ExportRow {
  pub(crate) fn formula(&self) -> Formula {
    Formula::new(link::hyperlink_formula(&self.url)).set_result(&self.url)
  }

  pub(crate) fn new(story: &Story, base_url: &str) -> Self {
    Self {
      title: story.title.clone(),
      url: link::resolve_link(base_url, &story.link),
      votes: story.votes,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_resolves_discussion_links() {
    let story = Story {
      link: "item?id=42".to_string(),
      title: "Ask HN: Anything?".to_string(),
      votes: 321,
    };

    assert_eq!(
      ExportRow::new(&story, "https://news.ycombinator.com/"),
      ExportRow {
        title: "Ask HN: Anything?".to_string(),
        url: "https://news.ycombinator.com/item?id=42".to_string(),
        votes: 321,
      }
    );
  }

  #[test]
  fn new_keeps_absolute_links() {
    let story = Story {
      link: "https://example.com/post".to_string(),
      title: "Post".to_string(),
      votes: 100,
    };

    assert_eq!(
      ExportRow::new(&story, "https://news.ycombinator.com/").url,
      "https://example.com/post"
    );
  }
}
