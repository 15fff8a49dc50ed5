//! 画像入力・プレビューコンポーネント

use face_verify_common::{ImageSlot, PreviewState};
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

#[component]
pub fn ImageInput(slot: ImageSlot) -> impl IntoView {
    let (preview, set_preview) = signal(PreviewState::default());

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => read_preview(file, set_preview),
            None => set_preview.set(PreviewState::cleared()),
        }
    };

    view! {
        <div class="form-group image-input">
            <label for=slot.field_name()>{slot.label()}</label>
            <input
                type="file"
                id=slot.field_name()
                name=slot.field_name()
                accept="image/png, image/jpeg"
                required=true
                on:change=on_change
            />
            <img
                id=slot.preview_id()
                class="preview"
                alt=format!("{} preview", slot.label())
                src=move || preview.with(|p| p.src.clone())
                style:display=move || preview.with(PreviewState::display)
            />
        </div>
    }
}

/// ファイルをData URLとして読み、完了したらプレビューを表示
///
/// 読めなかった場合はプレビューを変更しない。
fn read_preview(file: File, set_preview: WriteSignal<PreviewState>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            console::debug!(format!("FileReader unavailable: {:?}", e));
            return;
        }
    };

    let reader_clone = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            set_preview.set(PreviewState::loaded(data_url));
        }
    }) as Box<dyn FnMut(_)>);

    let file_name = file.name();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        console::debug!(format!("could not read {} for preview", file_name));
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        console::debug!(format!("read_as_data_url failed: {:?}", e));
    }
}
