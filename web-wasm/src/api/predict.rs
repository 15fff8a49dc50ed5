//! `/predict` 送信
//!
//! フォームの入力欄（画像2枚）にモデル名・距離指標を追加して
//! マルチパートでPOSTし、レスポンスを `SubmitOutcome` に分類する。

use face_verify_common::{
    DistanceMetric, RecognitionModel, SubmitOutcome, FIELD_DISTANCE_METRIC, FIELD_MODEL_NAME,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit, Response};

/// 送信ペイロードを作成
pub fn build_payload(
    form: &HtmlFormElement,
    model: RecognitionModel,
    metric: DistanceMetric,
) -> Result<FormData, JsValue> {
    let form_data = FormData::new_with_form(form)?;
    form_data.append_with_str(FIELD_MODEL_NAME, model.as_str())?;
    form_data.append_with_str(FIELD_DISTANCE_METRIC, metric.as_str())?;
    Ok(form_data)
}

/// POSTしてステータスとボディ（テキスト）を返す
async fn post_form(
    endpoint: &str,
    form: &HtmlFormElement,
    model: RecognitionModel,
    metric: DistanceMetric,
) -> Result<(bool, String), JsValue> {
    let payload = build_payload(form, model, metric)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&payload);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    Ok((resp.ok(), body.as_string().unwrap_or_default()))
}

/// 予測リクエストを1回送信
///
/// 通信例外はすべて `SubmitOutcome::Transport` に畳み込むため失敗しない。
pub async fn submit_prediction(
    endpoint: &str,
    form: &HtmlFormElement,
    model: RecognitionModel,
    metric: DistanceMetric,
) -> SubmitOutcome {
    match post_form(endpoint, form, model, metric).await {
        Ok((ok, body)) => SubmitOutcome::from_response(ok, &body),
        Err(err) => SubmitOutcome::transport_failure(describe_js_error(&err)),
    }
}

/// JS例外の説明文（`Error.message` を優先）
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use face_verify_common::CONNECTION_FAILURE_PREFIX;
    use wasm_bindgen_test::*;
    use web_sys::HtmlInputElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn make_form() -> HtmlFormElement {
        document().create_element("form").unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn build_payload_appends_selections() {
        let form = make_form();
        let payload = build_payload(&form, RecognitionModel::ArcFace, DistanceMetric::EuclideanL2)
            .expect("payload creation failed");

        assert_eq!(payload.get(FIELD_MODEL_NAME).as_string().as_deref(), Some("ArcFace"));
        assert_eq!(
            payload.get(FIELD_DISTANCE_METRIC).as_string().as_deref(),
            Some("euclidean_l2")
        );
    }

    #[wasm_bindgen_test]
    fn build_payload_keeps_native_fields() {
        let form = make_form();
        let input: HtmlInputElement = document().create_element("input").unwrap().dyn_into().unwrap();
        input.set_name("note");
        input.set_value("kept");
        form.append_child(&input).unwrap();

        let payload = build_payload(&form, RecognitionModel::default(), DistanceMetric::default())
            .expect("payload creation failed");

        assert_eq!(payload.get("note").as_string().as_deref(), Some("kept"));
        assert_eq!(payload.get(FIELD_MODEL_NAME).as_string().as_deref(), Some("VGG-Face"));
    }

    #[wasm_bindgen_test]
    fn describe_js_error_uses_message() {
        let err: JsValue = js_sys::Error::new("Failed to fetch").into();
        assert_eq!(describe_js_error(&err), "Failed to fetch");

        match SubmitOutcome::transport_failure(describe_js_error(&err)) {
            SubmitOutcome::Transport(message) => {
                assert_eq!(message, format!("{}Failed to fetch", CONNECTION_FAILURE_PREFIX));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    fn describe_js_error_string_value() {
        assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");
    }

    #[wasm_bindgen_test]
    async fn unreachable_endpoint_is_transport_failure() {
        let form = make_form();
        let outcome = submit_prediction(
            "http://127.0.0.1:9/predict",
            &form,
            RecognitionModel::default(),
            DistanceMetric::default(),
        )
        .await;

        assert!(matches!(outcome, SubmitOutcome::Transport(ref m) if m.starts_with(CONNECTION_FAILURE_PREFIX)));
    }
}
