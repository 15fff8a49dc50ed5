//! クライアント設定
//!
//! ホストページの `<script id="face-verify-config" type="application/json">`
//! に書かれたJSONを読む。全フィールド省略可能。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{DistanceMetric, RecognitionModel};

/// 設定ブロックの要素id
pub const CONFIG_ELEMENT_ID: &str = "face-verify-config";

/// 予測エンドポイントのデフォルト
pub const DEFAULT_PREDICT_ENDPOINT: &str = "/predict";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub predict_endpoint: String,
    pub default_model: RecognitionModel,
    pub default_metric: DistanceMetric,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            predict_endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
            default_model: RecognitionModel::default(),
            default_metric: DistanceMetric::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        if config.predict_endpoint.trim().is_empty() {
            return Err(Error::Config("predict_endpoint が空です".into()));
        }
        Ok(config)
    }
}
