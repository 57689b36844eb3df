use rand::seq::SliceRandom;

/// Cut the collected comments down to the analyzed sample: truncate to at
/// most `target` (the final page can overshoot), then shuffle so the preview
/// is not biased toward the earliest comments.
pub fn draw(mut comments: Vec<String>, target: usize) -> Vec<String> {
    comments.truncate(target);
    comments.shuffle(&mut rand::rng());
    comments
}
