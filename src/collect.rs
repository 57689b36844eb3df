use eyre::Result;
use log::{debug, info};

use crate::youtube::CommentSource;

/// Everything gathered for one analysis request
#[derive(Debug, Clone)]
pub struct CollectOutcome {
    pub comments: Vec<String>,
    /// True when the upstream ran out of pages before `target` was reached
    pub exhausted: bool,
}

/// Fetch comment pages sequentially until the target count is reached, a page
/// comes back empty, or the upstream stops issuing continuation cursors.
///
/// Exhaustion below the target is not an error: whatever was collected is
/// returned with `exhausted` set. A transport or parse error on any page
/// aborts the whole collection and discards prior pages.
pub async fn collect_comments<S: CommentSource>(
    source: &S,
    video_id: &str,
    target: usize,
) -> Result<CollectOutcome> {
    let mut comments: Vec<String> = Vec::new();
    let mut page_token: Option<String> = None;
    let mut exhausted = false;

    loop {
        let page = source.fetch_page(video_id, page_token.as_deref()).await?;

        if page.comments.is_empty() {
            exhausted = true;
            break;
        }

        debug!(
            "Fetched page: {} comments (total so far: {}, hint: {:?})",
            page.comments.len(),
            comments.len() + page.comments.len(),
            page.total_hint,
        );
        comments.extend(page.comments);

        if comments.len() >= target {
            break;
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => {
                exhausted = true;
                break;
            }
        }
    }

    if exhausted && comments.len() < target {
        info!(
            "No more comments available: collected {} of {} requested",
            comments.len(),
            target
        );
    }

    Ok(CollectOutcome { comments, exhausted })
}
