pub mod aggregate;
pub mod collect;
pub mod config;
pub mod output;
pub mod sample;
pub mod sentiment;
pub mod trending;
pub mod youtube;

use serde::Serialize;

/// One scored comment
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub text: String,
    pub score: i32,
}

/// Sentiment class derived from a comment's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl Comment {
    pub fn label(&self) -> SentimentLabel {
        if self.score > 0 {
            SentimentLabel::Positive
        } else if self.score < 0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Share of each sentiment class in the analyzed sample, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SamplePercentages {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub video_id: String,
    /// Comments actually scored (after truncation and shuffling)
    pub analyzed: usize,
    /// Comments fetched from the API before sampling
    pub collected: usize,
    /// True when the upstream ran out of comments before the target was met
    pub exhausted: bool,
    pub percentages: SamplePercentages,
    /// First comments of the shuffled sample, shown with their scores
    pub preview: Vec<Comment>,
}

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    // youtu.be/ID
    if let Some(caps) = regex::Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtube.com/embed/ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtube.com/shorts/ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // Any youtube.com path carrying a v= query parameter (covers watch URLs)
    if let Some(caps) = regex::Regex::new(r"youtube\.com/\S*[?&]v=([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_video_id() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url_with_share_suffix() {
        assert_eq!(
            extract_video_id("check this out https://youtu.be/dQw4w9WgXcQ?feature=share"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_arbitrary_path_with_v_param() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/live/chat?foo=1&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(extract_video_id("not-a-valid-id"), None);
    }

    #[test]
    fn test_unrelated_url() {
        assert_eq!(extract_video_id("https://example.com/watch?v=tooshort"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(extract_video_id("  dQw4w9WgXcQ  "), Some("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_label_from_score() {
        let pos = Comment { text: "great".into(), score: 3 };
        let neg = Comment { text: "awful".into(), score: -2 };
        let neu = Comment { text: "ok".into(), score: 0 };
        assert_eq!(pos.label(), SentimentLabel::Positive);
        assert_eq!(neg.label(), SentimentLabel::Negative);
        assert_eq!(neu.label(), SentimentLabel::Neutral);
    }
}
