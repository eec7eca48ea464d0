//! Browser file-payload readers for the upload surfaces.

use archive_host::UploadFile;

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Reads every file of a picked or dropped [`web_sys::FileList`] into raw upload payloads.
pub async fn read_file_list(files: &web_sys::FileList) -> Result<Vec<UploadFile>, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = files;
        Err("file payloads are only available when compiled for wasm32".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    {
        let mut payloads = Vec::new();
        for index in 0..files.length() {
            let Some(file) = files.get(index) else {
                continue;
            };
            payloads.push(read_file(&file).await?);
        }
        Ok(payloads)
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_file(file: &web_sys::File) -> Result<UploadFile, String> {
    let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<Vec<u8>, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let load_sender = sender.clone();
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        let result = reader_for_load
            .result()
            .map_err(|err| format!("failed to read upload file: {err:?}"))
            .map(|value| js_sys::Uint8Array::new(&value).to_vec());
        if let Some(tx) = load_sender.borrow_mut().take() {
            let _ = tx.send(result);
        }
    }));
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

    let error_sender = sender.clone();
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
        if let Some(tx) = error_sender.borrow_mut().take() {
            let _ = tx.send(Err("failed to load upload file".to_string()));
        }
    }));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    reader
        .read_as_array_buffer(file)
        .map_err(|err| format!("failed to start file read: {err:?}"))?;

    let result = rx
        .await
        .map_err(|_| "file read was interrupted".to_string())?;
    on_load.forget();
    on_error.forget();

    Ok(UploadFile {
        name: file.name(),
        mime_type: file.type_(),
        bytes: result?,
    })
}
