//! Image analysis used by the search-by-image flow.
//!
//! There is no vision model behind this: [`StubImageAnalyzer`] returns the
//! same water-treatment analysis for every image, and the company matcher
//! filters on a fixed set of category and technology name fragments.

use serde::{Deserialize, Serialize};

/// Result of analysing an uploaded image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub category: Option<String>,
    pub features: Vec<String>,
    pub keywords: Vec<String>,
    pub confidence: f64,
}

/// Name fragments a company's technologies must contain to be matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    /// Matched against `technology_categories.name`
    pub category_terms: Vec<String>,
    /// Matched against `company_technologies.technology_name`
    pub technology_terms: Vec<String>,
}

pub trait ImageAnalyzer: Send + Sync {
    fn analyze(&self, image_url: Option<&str>) -> ImageAnalysis;

    fn match_criteria(&self, analysis: &ImageAnalysis) -> MatchCriteria;
}

/// Constant confidence reported by the stub and stored as the match score
pub const STUB_CONFIDENCE: f64 = 0.85;

/// Match reason stored with each result ("technology field match")
pub const STUB_MATCH_REASON: &str = "기술 분야 일치";

#[derive(Debug, Default, Clone, Copy)]
pub struct StubImageAnalyzer;

impl ImageAnalyzer for StubImageAnalyzer {
    fn analyze(&self, _image_url: Option<&str>) -> ImageAnalysis {
        ImageAnalysis {
            category: Some("수처리·환경".to_string()),
            features: vec![
                "펌프".to_string(),
                "배관".to_string(),
                "스테인리스".to_string(),
                "담수화".to_string(),
            ],
            keywords: vec![
                "역삼투압".to_string(),
                "RO막".to_string(),
                "바닷물".to_string(),
            ],
            confidence: STUB_CONFIDENCE,
        }
    }

    fn match_criteria(&self, _analysis: &ImageAnalysis) -> MatchCriteria {
        MatchCriteria {
            category_terms: vec!["담수화".to_string(), "수처리".to_string()],
            technology_terms: vec!["RO".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_ignores_input() {
        let analyzer = StubImageAnalyzer;
        let a = analyzer.analyze(Some("https://cdn.example.com/pump.jpg"));
        let b = analyzer.analyze(Some("data:image/png;base64,AAAA"));
        let c = analyzer.analyze(None);

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.category.as_deref(), Some("수처리·환경"));
        assert_eq!(a.features, vec!["펌프", "배관", "스테인리스", "담수화"]);
        assert_eq!(a.confidence, 0.85);
    }

    #[test]
    fn test_stub_criteria() {
        let analyzer = StubImageAnalyzer;
        let criteria = analyzer.match_criteria(&analyzer.analyze(None));
        assert_eq!(criteria.category_terms, vec!["담수화", "수처리"]);
        assert_eq!(criteria.technology_terms, vec!["RO"]);
    }

    #[test]
    fn test_analysis_json_shape() {
        let json = serde_json::to_value(StubImageAnalyzer.analyze(None)).unwrap();
        assert_eq!(json["keywords"][1], "RO막");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
