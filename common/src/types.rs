//! 予測リクエスト・レスポンスの型定義
//!
//! Web(WASM)とテストで共有される型:
//! - ImageSlot: 2つの画像入力欄
//! - RecognitionModel / DistanceMetric: バックエンドが受け付ける選択肢
//! - PredictionResult: `/predict` 成功時のレスポンス
//! - ErrorBody: `/predict` 失敗時のレスポンス

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// モデル名のマルチパートフィールド名
pub const FIELD_MODEL_NAME: &str = "model_name";

/// 距離指標のマルチパートフィールド名
pub const FIELD_DISTANCE_METRIC: &str = "distance_metric";

/// 画像入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    First,
    Second,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::First, ImageSlot::Second];

    /// マルチパートのフィールド名（input要素のname/idと同じ）
    pub fn field_name(&self) -> &'static str {
        match self {
            ImageSlot::First => "image1",
            ImageSlot::Second => "image2",
        }
    }

    /// プレビュー画像要素のid
    pub fn preview_id(&self) -> &'static str {
        match self {
            ImageSlot::First => "preview1",
            ImageSlot::Second => "preview2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageSlot::First => "Image 1",
            ImageSlot::Second => "Image 2",
        }
    }
}

/// 顔認識モデル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecognitionModel {
    #[default]
    VggFace,
    Facenet,
    Facenet512,
    OpenFace,
    DeepFace,
    DeepId,
    ArcFace,
    Dlib,
    SFace,
    GhostFaceNet,
}

impl RecognitionModel {
    pub const ALL: [RecognitionModel; 10] = [
        RecognitionModel::VggFace,
        RecognitionModel::Facenet,
        RecognitionModel::Facenet512,
        RecognitionModel::OpenFace,
        RecognitionModel::DeepFace,
        RecognitionModel::DeepId,
        RecognitionModel::ArcFace,
        RecognitionModel::Dlib,
        RecognitionModel::SFace,
        RecognitionModel::GhostFaceNet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionModel::VggFace => "VGG-Face",
            RecognitionModel::Facenet => "Facenet",
            RecognitionModel::Facenet512 => "Facenet512",
            RecognitionModel::OpenFace => "OpenFace",
            RecognitionModel::DeepFace => "DeepFace",
            RecognitionModel::DeepId => "DeepID",
            RecognitionModel::ArcFace => "ArcFace",
            RecognitionModel::Dlib => "Dlib",
            RecognitionModel::SFace => "SFace",
            RecognitionModel::GhostFaceNet => "GhostFaceNet",
        }
    }
}

impl fmt::Display for RecognitionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecognitionModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

impl TryFrom<String> for RecognitionModel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecognitionModel> for String {
    fn from(model: RecognitionModel) -> Self {
        model.as_str().to_string()
    }
}

/// 埋め込みベクトル間の距離指標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DistanceMetric {
    #[default]
    Cosine,
    Euclidean,
    EuclideanL2,
}

impl DistanceMetric {
    pub const ALL: [DistanceMetric; 3] = [
        DistanceMetric::Cosine,
        DistanceMetric::Euclidean,
        DistanceMetric::EuclideanL2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::EuclideanL2 => "euclidean_l2",
        }
    }

    /// セレクトボックスの表示名
    pub fn label(&self) -> &'static str {
        match self {
            DistanceMetric::Cosine => "Cosine",
            DistanceMetric::Euclidean => "Euclidean",
            DistanceMetric::EuclideanL2 => "Euclidean L2",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| Error::UnknownMetric(s.to_string()))
    }
}

impl TryFrom<String> for DistanceMetric {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DistanceMetric> for String {
    fn from(metric: DistanceMetric) -> Self {
        metric.as_str().to_string()
    }
}

/// `/predict` 成功時のレスポンス
///
/// `model` と `similarity_metric` はバックエンドが実際に使用した値で、
/// 送信した選択肢と一致するとは限らないため文字列のまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub verified: bool,
    pub distance: f64,
    pub threshold: f64,
    pub model: String,
    pub similarity_metric: String,
}

/// `/predict` 失敗時のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_slot_field_names() {
        assert_eq!(ImageSlot::First.field_name(), "image1");
        assert_eq!(ImageSlot::Second.field_name(), "image2");
        assert_eq!(ImageSlot::Second.preview_id(), "preview2");
    }

    #[test]
    fn test_model_default_is_vgg_face() {
        assert_eq!(RecognitionModel::default().as_str(), "VGG-Face");
        assert_eq!(DistanceMetric::default().as_str(), "cosine");
    }

    #[test]
    fn test_model_from_str() {
        let model: RecognitionModel = "ArcFace".parse().expect("パース失敗");
        assert_eq!(model, RecognitionModel::ArcFace);
        let model: RecognitionModel = "DeepID".parse().expect("パース失敗");
        assert_eq!(model, RecognitionModel::DeepId);
    }

    #[test]
    fn test_model_from_str_is_case_sensitive() {
        let err = "arcface".parse::<RecognitionModel>().unwrap_err();
        assert!(matches!(err, Error::UnknownModel(ref s) if s == "arcface"));
    }

    #[test]
    fn test_all_models_have_unique_wire_names() {
        let mut names: Vec<&str> = RecognitionModel::ALL.iter().map(|m| m.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RecognitionModel::ALL.len());
    }

    #[test]
    fn test_metric_from_str() {
        let metric: DistanceMetric = "euclidean_l2".parse().expect("パース失敗");
        assert_eq!(metric, DistanceMetric::EuclideanL2);
        assert!("manhattan".parse::<DistanceMetric>().is_err());
    }

    #[test]
    fn test_model_serde_uses_wire_name() {
        let json = serde_json::to_string(&RecognitionModel::VggFace).expect("シリアライズ失敗");
        assert_eq!(json, "\"VGG-Face\"");

        let metric: DistanceMetric = serde_json::from_str("\"euclidean\"").expect("デシリアライズ失敗");
        assert_eq!(metric, DistanceMetric::Euclidean);
        assert!(serde_json::from_str::<DistanceMetric>("\"l1\"").is_err());
    }

    #[test]
    fn test_prediction_result_deserialize() {
        let json = r#"{
            "verified": true,
            "distance": 0.2,
            "threshold": 0.4,
            "model": "ArcFace",
            "similarity_metric": "cosine"
        }"#;

        let result: PredictionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(result.verified);
        assert_eq!(result.distance, 0.2);
        assert_eq!(result.threshold, 0.4);
        assert_eq!(result.model, "ArcFace");
        assert_eq!(result.similarity_metric, "cosine");
    }

    #[test]
    fn test_prediction_result_missing_field_fails() {
        let json = r#"{"verified": true, "distance": 0.2}"#;
        assert!(serde_json::from_str::<PredictionResult>(json).is_err());
    }

    #[test]
    fn test_error_body_without_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "x"}"#).expect("デシリアライズ失敗");
        assert_eq!(body.error, None);
    }
}
