#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Page {
  pub(crate) body: String,
  pub(crate) url: String,
}
