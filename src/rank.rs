use super::*;

/// Keeps stories with more than `threshold` votes, highest first.
///
/// Rows without a vote count (job postings) or without a link are dropped.
/// Vote text that is not a plain count aborts ranking. Stories with equal
/// votes keep their listing order.
pub(crate) fn rank(rows: Vec<StoryRow>, threshold: u32) -> Result<Vec<Story>> {
  let candidates = rows.len();

  let mut stories = Vec::new();

  for row in rows {
    let Some(vote_text) = row.vote_text else {
      debug!(title = %row.title, "skipping story without votes");
      continue;
    };

    let votes = votes::parse_votes(&vote_text, &row.title)?;

    if votes <= threshold {
      continue;
    }

    let Some(link) = row.link else {
      warn!(title = %row.title, votes, "skipping story without a link");
      continue;
    };

    stories.push(Story {
      link,
      title: row.title,
      votes,
    });
  }

  stories.sort_by_key(|story| Reverse(story.votes));

  info!(candidates, kept = stories.len(), threshold, "ranked stories");

  Ok(stories)
}
