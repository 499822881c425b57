/// Скачивание xlsx-файлов, полученных от сервиса (экспорт и шаблон импорта)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Файл, готовый к скачиванию
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Извлекает имя файла из заголовка Content-Disposition.
///
/// `filename*=UTF-8''...` имеет приоритет над `filename="..."`.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let encoded = value
                    .trim()
                    .trim_matches('"')
                    .splitn(3, '\'')
                    .last()
                    .unwrap_or_default();
                if let Ok(decoded) = urlencoding::decode(encoded) {
                    if !decoded.is_empty() {
                        return Some(decoded.into_owned());
                    }
                }
            }
            "filename" => {
                let name = value.trim().trim_matches('"');
                if !name.is_empty() {
                    plain = Some(name.to_string());
                }
            }
            _ => {}
        }
    }
    plain
}

/// Инициирует скачивание файла через Blob и временную ссылку
pub fn save_file(file: &DownloadFile) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    download_blob(&blob, &file.filename)
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filename() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="stock.xlsx""#),
            Some("stock.xlsx".to_string())
        );
    }

    #[test]
    fn encoded_filename_wins() {
        let header = "attachment; filename=\"export.xlsx\"; filename*=UTF-8''%E8%82%A1%E7%A5%A8.xlsx";
        assert_eq!(filename_from_disposition(header), Some("股票.xlsx".to_string()));
    }

    #[test]
    fn missing_filename() {
        assert_eq!(filename_from_disposition("attachment"), None);
        assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
    }
}
