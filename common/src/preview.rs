//! 画像プレビューの状態

/// 画像未選択時のプレビューsrc
pub const PLACEHOLDER_SRC: &str = "#";

/// プレビュー画像1枚分の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub src: String,
    pub visible: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            src: PLACEHOLDER_SRC.to_string(),
            visible: false,
        }
    }
}

impl PreviewState {
    /// ファイル読み込み完了（Data URL）
    pub fn loaded(data_url: String) -> Self {
        Self {
            src: data_url,
            visible: true,
        }
    }

    /// 選択解除
    pub fn cleared() -> Self {
        Self::default()
    }

    /// CSSの display 値
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}
