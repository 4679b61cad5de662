/// One story as it appears on a listing page, before any filtering.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StoryRow {
  pub(crate) link: Option<String>,
  pub(crate) title: String,
  pub(crate) vote_text: Option<String>,
}
