//! CSV/JSON export of IOC rows, with browser download under `hydrate`.
//!
//! The serialization itself is pure and tested; only the final
//! save-to-disk step touches the DOM.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::net::types::Ioc;

/// Quote a CSV field when it contains a delimiter, quote, or line break.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

/// Render IOC rows as CSV with a header line.
#[must_use]
pub fn iocs_to_csv(iocs: &[Ioc]) -> String {
    let mut out = String::from("id,type,value,severity,confidence,source,observedCount,firstSeen,lastSeen\n");
    for ioc in iocs {
        let row = [
            csv_escape(&ioc.id),
            ioc.kind.as_str().to_owned(),
            csv_escape(&ioc.value),
            ioc.severity.as_str().to_owned(),
            ioc.confidence.to_string(),
            csv_escape(&ioc.source),
            ioc.observed_count.to_string(),
            csv_escape(&ioc.first_seen),
            csv_escape(&ioc.last_seen),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Render any exportable value as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

/// Timestamped export filename, e.g. `iocs-1755900000000.csv`.
#[must_use]
pub fn export_filename(prefix: &str, ext: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now_ms = js_sys::Date::now() as u64;
        format!("{prefix}-{now_ms}.{ext}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format!("{prefix}.{ext}")
    }
}

/// Trigger a browser download of `contents` under `filename`.
/// No-op on the server.
pub fn download_file(filename: &str, mime: &str, contents: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
    }
}
