use super::*;

fn unsupported() -> ArchiveError {
    ArchiveError::transport("archive HTTP transport is only available when compiled for wasm32")
}

pub async fn get_text(_url: &str) -> Result<HttpText, ArchiveError> {
    Err(unsupported())
}

pub async fn post_json(_url: &str, _body: &serde_json::Value) -> Result<HttpText, ArchiveError> {
    Err(unsupported())
}

pub async fn post_multipart(_url: &str, _files: &[UploadFile]) -> Result<HttpText, ArchiveError> {
    Err(unsupported())
}
