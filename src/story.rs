#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Story {
  pub(crate) link: String,
  pub(crate) title: String,
  pub(crate) votes: u32,
}
