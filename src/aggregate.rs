use crate::sentiment::Scorer;
use crate::{AnalysisReport, Comment, SamplePercentages, SentimentLabel};

/// How many scored comments the report shows alongside the percentages
pub const PREVIEW_SIZE: usize = 15;

/// Score every comment in the sample, classify, and compute percentage shares.
///
/// The preview is the first `PREVIEW_SIZE` comments in sample order; the
/// sampler already shuffled, so this is effectively a random subset.
pub fn analyze<S: Scorer>(
    scorer: &S,
    video_id: &str,
    sample: Vec<String>,
    collected: usize,
    exhausted: bool,
) -> AnalysisReport {
    let scored: Vec<Comment> = sample
        .into_iter()
        .map(|text| {
            let score = scorer.score(&text);
            Comment { text, score }
        })
        .collect();

    let percentages = percentages(&scored);
    let analyzed = scored.len();
    let preview = scored.into_iter().take(PREVIEW_SIZE).collect();

    AnalysisReport {
        video_id: video_id.to_string(),
        analyzed,
        collected,
        exhausted,
        percentages,
        preview,
    }
}

/// Percentage share of each class, rounded to two decimals. An empty sample
/// yields all zeros rather than NaN.
pub fn percentages(scored: &[Comment]) -> SamplePercentages {
    let total = scored.len();
    if total == 0 {
        return SamplePercentages::default();
    }

    let positive = scored.iter().filter(|c| c.label() == SentimentLabel::Positive).count();
    let negative = scored.iter().filter(|c| c.label() == SentimentLabel::Negative).count();
    let neutral = total - positive - negative;

    SamplePercentages {
        positive: round2(positive as f64 * 100.0 / total as f64),
        negative: round2(negative as f64 * 100.0 / total as f64),
        neutral: round2(neutral as f64 * 100.0 / total as f64),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(Vec<i32>);

    impl Scorer for FixedScorer {
        fn score(&self, text: &str) -> i32 {
            let idx: usize = text.parse().unwrap();
            self.0[idx]
        }
    }

    fn scored(scores: &[i32]) -> Vec<Comment> {
        scores
            .iter()
            .map(|&score| Comment { text: String::new(), score })
            .collect()
    }

    #[test]
    fn test_concrete_scenario() {
        // 3 positive, 3 negative, 4 neutral out of 10
        let pct = percentages(&scored(&[3, -1, 0, 0, 2, -4, 0, 1, -2, 0]));
        assert_eq!(pct.positive, 30.00);
        assert_eq!(pct.negative, 30.00);
        assert_eq!(pct.neutral, 40.00);
    }

    #[test]
    fn test_empty_sample_is_all_zero() {
        let pct = percentages(&[]);
        assert_eq!(pct, SamplePercentages::default());
        assert_eq!(pct.positive + pct.negative + pct.neutral, 0.0);
    }

    #[test]
    fn test_percentages_sum_to_about_100() {
        // Thirds round to 33.33 each; the sum drifts within 0.01 of 100
        let pct = percentages(&scored(&[1, -1, 0]));
        assert_eq!(pct.positive, 33.33);
        let sum = pct.positive + pct.negative + pct.neutral;
        assert!((sum - 100.0).abs() <= 0.01 + 1e-9);
    }

    #[test]
    fn test_all_neutral() {
        let pct = percentages(&scored(&[0, 0, 0, 0]));
        assert_eq!(pct.neutral, 100.00);
        assert_eq!(pct.positive, 0.0);
        assert_eq!(pct.negative, 0.0);
    }

    #[test]
    fn test_analyze_builds_report() {
        let scores = vec![2, -3, 0];
        let sample: Vec<String> = (0..scores.len()).map(|i| i.to_string()).collect();
        let report = analyze(&FixedScorer(scores), "vid123", sample, 120, true);

        assert_eq!(report.video_id, "vid123");
        assert_eq!(report.analyzed, 3);
        assert_eq!(report.collected, 120);
        assert!(report.exhausted);
        assert_eq!(report.preview.len(), 3);
        assert_eq!(report.preview[0].score, 2);
        assert_eq!(report.preview[1].label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_preview_caps_at_fifteen() {
        let scores: Vec<i32> = (0..40).map(|i| i % 3 - 1).collect();
        let sample: Vec<String> = (0..40).map(|i| i.to_string()).collect();
        let report = analyze(&FixedScorer(scores), "vid", sample, 40, false);
        assert_eq!(report.preview.len(), PREVIEW_SIZE);
        // Preview preserves sample order
        assert_eq!(report.preview[0].text, "0");
        assert_eq!(report.preview[14].text, "14");
    }

    #[test]
    fn test_empty_sample_report() {
        let report = analyze(&FixedScorer(vec![]), "vid", vec![], 0, true);
        assert_eq!(report.analyzed, 0);
        assert!(report.preview.is_empty());
        assert_eq!(report.percentages, SamplePercentages::default());
    }
}
