//! Listing page markup for tests, shaped like the live site.

pub(crate) fn job(id: u64, title: &str, href: &str) -> String {
  format!(
    r#"<tr class="athing submission" id="{id}">
  <td align="right" valign="top" class="title"><span class="rank">{id}.</span></td>
  <td class="title"><span class="titleline"><a href="{href}">{title}</a></span></td>
</tr>
<tr>
  <td colspan="2"></td>
  <td class="subtext"><span class="subline"><span class="age"><a href="item?id={id}">1 hour ago</a></span></span></td>
</tr>
<tr class="spacer" style="height:5px"></tr>
"#
  )
}

pub(crate) fn listing(rows: &[String]) -> String {
  format!(
    r#"<html lang="en">
<head><title>Hacker News</title></head>
<body>
<center>
<table id="hnmain">
<tr><td><table class="itemlist">
{}
<tr class="morespace" style="height:10px"></tr>
<tr><td colspan="2"></td><td class="title"><a href="?p=2" class="morelink">More</a></td></tr>
</table></td></tr>
</table>
</center>
</body>
</html>
"#,
    rows.concat()
  )
}

pub(crate) fn story(id: u64, title: &str, href: &str, votes: &str) -> String {
  format!(
    r#"<tr class="athing submission" id="{id}">
  <td align="right" valign="top" class="title"><span class="rank">{id}.</span></td>
  <td class="title"><span class="titleline"><a href="{href}">{title}</a><span class="sitebit comhead"> (<a href="from?site=example.com"><span class="sitestr">example.com</span></a>)</span></span></td>
</tr>
<tr>
  <td colspan="2"></td>
  <td class="subtext"><span class="subline">
    <span class="score" id="score_{id}">{votes}</span> by <a href="user?id=someone" class="hnuser">someone</a>
    <span class="age"><a href="item?id={id}">2 hours ago</a></span>
    | <a href="item?id={id}">12&nbsp;comments</a>
  </span></td>
</tr>
<tr class="spacer" style="height:5px"></tr>
"#
  )
}
