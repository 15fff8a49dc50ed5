//! ホストページからの設定読み込み

use face_verify_common::{ClientConfig, CONFIG_ELEMENT_ID};
use gloo::console;

/// 設定ブロックを読む
///
/// ブロックが無ければデフォルト、不正ならコンソールに警告してデフォルト。
pub fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return ClientConfig::default();
    };

    match ClientConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            console::warn!(format!("invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e));
            ClientConfig::default()
        }
    }
}
