//! フォームの表示状態
//!
//! 結果・エラー・読み込み中の3パネルは1つの `Panel` で表すため、
//! 同時に2つ以上が表示されることはない。送信ボタンの有効/無効も
//! `Panel::Loading` から導出する。

use crate::error::{Error, Result};
use crate::outcome::SubmitOutcome;
use crate::view::ResultView;

/// 表示中のパネル
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Panel {
    /// 何も表示していない（初期状態）
    #[default]
    Idle,
    Loading,
    Result(ResultView),
    Error(String),
}

/// フォーム全体の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    panel: Panel,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送信開始
    ///
    /// 結果・エラーを隠して読み込み中にし、送信ボタンを無効化する。
    /// 送信中に呼ばれた場合は状態を変えずに `SubmissionInFlight` を返す。
    pub fn begin_submit(&mut self) -> Result<()> {
        if self.is_loading() {
            return Err(Error::SubmissionInFlight);
        }
        self.panel = Panel::Loading;
        Ok(())
    }

    /// 送信結果を反映
    ///
    /// 読み込み中表示を消し、送信ボタンを再度有効化してから
    /// 結果パネルまたはエラーパネルを表示する。
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.panel = match outcome {
            SubmitOutcome::Success(result) => Panel::Result(ResultView::from(&result)),
            SubmitOutcome::ServerError(message) | SubmitOutcome::Transport(message) => {
                Panel::Error(message)
            }
        };
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.panel, Panel::Loading)
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn result_view(&self) -> Option<&ResultView> {
        match &self.panel {
            Panel::Result(view) => Some(view),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.panel {
            Panel::Error(message) => Some(message),
            _ => None,
        }
    }
}
