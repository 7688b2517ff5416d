use js_sys::Uint8Array;
use std::rc::Rc;
use vehicle_form::{UploadError, UploadSource};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

/// An object URL pointing at a local file. Revoked when dropped.
#[derive(Debug, PartialEq)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn for_file(file: &File) -> Option<Self> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self(url)),
            Err(e) => {
                tracing::warn!("No preview for {}: {e:?}", file.name());
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// A picked file and its preview. Shared between form snapshots, so the
/// preview lives until the last snapshot holding it is gone.
#[derive(Debug, PartialEq)]
pub struct SelectedImage {
    pub file: File,
    pub preview: Option<PreviewUrl>,
}

impl SelectedImage {
    pub fn new(file: File) -> Rc<Self> {
        let preview = PreviewUrl::for_file(&file);
        Rc::new(Self { file, preview })
    }

    pub fn preview_src(&self) -> String {
        self.preview
            .as_ref()
            .map(|preview| preview.as_str().to_string())
            .unwrap_or_default()
    }
}

impl UploadSource for SelectedImage {
    fn file_name(&self) -> String {
        self.file.name()
    }

    async fn read(&self) -> Result<Vec<u8>, UploadError> {
        let buffer = JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|_| UploadError::Read(self.file.name()))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}
