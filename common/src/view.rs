//! 結果パネルの表示テキスト

use crate::types::PredictionResult;

/// 判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    NotVerified,
}

impl Verdict {
    pub fn from_verified(verified: bool) -> Self {
        if verified {
            Verdict::Verified
        } else {
            Verdict::NotVerified
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Verified => "Result: Same Person (Verified)",
            Verdict::NotVerified => "Result: Different Persons (Not Verified)",
        }
    }

    /// 判定テキストに付けるCSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            Verdict::Verified => "verified",
            Verdict::NotVerified => "not-verified",
        }
    }
}

/// 結果パネルに表示する行
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub verdict: Verdict,
    pub distance_text: String,
    pub threshold_text: String,
    pub model_text: String,
    pub metric_text: String,
}

impl ResultView {
    /// 判定以外の4行（表示順）
    pub fn detail_lines(&self) -> [&str; 4] {
        [
            self.distance_text.as_str(),
            self.threshold_text.as_str(),
            self.model_text.as_str(),
            self.metric_text.as_str(),
        ]
    }
}

impl From<&PredictionResult> for ResultView {
    fn from(result: &PredictionResult) -> Self {
        Self {
            verdict: Verdict::from_verified(result.verified),
            distance_text: format!("Distance: {}", result.distance),
            threshold_text: format!(
                "Threshold: {} (Distance < Threshold for verification)",
                result.threshold
            ),
            model_text: format!("Model Used: {}", result.model),
            metric_text: format!("Distance Metric Used: {}", result.similarity_metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(verified: bool, distance: f64) -> PredictionResult {
        PredictionResult {
            verified,
            distance,
            threshold: 0.4,
            model: "ArcFace".to_string(),
            similarity_metric: "cosine".to_string(),
        }
    }

    #[test]
    fn test_verified_result_lines() {
        let view = ResultView::from(&sample(true, 0.2));

        assert_eq!(view.verdict, Verdict::Verified);
        assert_eq!(view.verdict.text(), "Result: Same Person (Verified)");
        assert_eq!(view.verdict.css_class(), "verified");
        assert_eq!(
            view.detail_lines(),
            [
                "Distance: 0.2",
                "Threshold: 0.4 (Distance < Threshold for verification)",
                "Model Used: ArcFace",
                "Distance Metric Used: cosine",
            ]
        );
    }

    #[test]
    fn test_not_verified_result() {
        let view = ResultView::from(&sample(false, 0.9));

        assert_eq!(view.verdict.text(), "Result: Different Persons (Not Verified)");
        assert_eq!(view.verdict.css_class(), "not-verified");
        assert_eq!(view.distance_text, "Distance: 0.9");
    }

    #[test]
    fn test_integral_numbers_render_without_fraction() {
        let mut result = sample(false, 1.0);
        result.threshold = 10.0;
        let view = ResultView::from(&result);

        assert_eq!(view.distance_text, "Distance: 1");
        assert!(view.threshold_text.starts_with("Threshold: 10 "));
    }
}
