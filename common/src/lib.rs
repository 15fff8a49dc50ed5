//! Face Verify Common Library
//!
//! Web(WASM)フロントエンドで使う型・表示テキスト・フォーム状態。
//! DOMに依存しないのでネイティブでテストできる。

pub mod types;
pub mod error;
pub mod outcome;
pub mod view;
pub mod form;
pub mod preview;
pub mod config;

pub use types::{
    DistanceMetric, ErrorBody, ImageSlot, PredictionResult, RecognitionModel,
    FIELD_DISTANCE_METRIC, FIELD_MODEL_NAME,
};
pub use error::{Error, Result};
pub use outcome::{SubmitOutcome, CONNECTION_FAILURE_PREFIX, UNKNOWN_ERROR_MESSAGE};
pub use view::{ResultView, Verdict};
pub use form::{FormState, Panel};
pub use preview::{PreviewState, PLACEHOLDER_SRC};
pub use config::{ClientConfig, CONFIG_ELEMENT_ID, DEFAULT_PREDICT_ENDPOINT};
