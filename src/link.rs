/// Makes discussion links such as `item?id=123` absolute against the site
/// root. Every other link is returned untouched.
pub(crate) fn resolve_link(base_url: &str, link: &str) -> String {
  if link.starts_with("item") {
    format!("{base_url}{link}")
  } else {
    link.to_string()
  }
}

pub(crate) fn hyperlink_formula(url: &str) -> String {
  let escaped = url.replace('"', "\"\"");
  format!("=HYPERLINK(\"{escaped}\", \"{escaped}\")")
}
