//! C-ABI FFI bindings for hosts that embed the renderer.
//!
//! Every function takes the plan text as a null-terminated UTF-8 string.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::export::DirectorySink;
use crate::render::JsonFormat;
use crate::style::Theme;
use crate::{ExportStatus, PlanOptions, PlanSession};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct PlandocResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `plandoc_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `plandoc_free_result`.
    pub error: *mut c_char,
}

impl PlandocResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{} cannot be null", what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 {}", what))
}

fn session_for(text: &str, theme: Theme) -> crate::Result<PlanSession> {
    let mut session = PlanSession::new(PlanOptions::default().with_theme(theme))?;
    session.load(text);
    Ok(session)
}

/// Render plan text to an HTML fragment.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `plandoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn plandoc_to_html(text: *const c_char, dark: bool) -> PlandocResult {
    let text = match read_str(text, "text") {
        Ok(s) => s,
        Err(e) => return PlandocResult::error(e),
    };

    let theme = if dark { Theme::Dark } else { Theme::Light };
    match session_for(text, theme) {
        Ok(session) => PlandocResult::success(session.html()),
        Err(e) => PlandocResult::error(e.to_string()),
    }
}

/// Render plan text to JSON display nodes.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `plandoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn plandoc_to_json(text: *const c_char, pretty: bool) -> PlandocResult {
    let text = match read_str(text, "text") {
        Ok(s) => s,
        Err(e) => return PlandocResult::error(e),
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    match to_json_internal(text, format) {
        Ok(json) => PlandocResult::success(json),
        Err(e) => PlandocResult::error(e.to_string()),
    }
}

fn to_json_internal(text: &str, format: JsonFormat) -> crate::Result<String> {
    let session = session_for(text, Theme::default())?;
    crate::render::to_json(&session.display_nodes(), format)
}

/// Get the number of exported pages for plan text.
///
/// Returns -1 on error.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn plandoc_page_count(text: *const c_char) -> i32 {
    let Ok(text) = read_str(text, "text") else {
        return -1;
    };

    match session_for(text, Theme::default()).and_then(|s| s.pages()) {
        Ok(pages) => pages.len() as i32,
        Err(_) => -1,
    }
}

/// Export plan text as a dated PDF into a directory.
///
/// On success `data` holds the path of the saved file. `options_json` may
/// be null for the default options.
///
/// # Safety
///
/// `text` and `dir` must be valid null-terminated UTF-8 strings;
/// `options_json` must be null or one.
/// The returned result must be freed with `plandoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn plandoc_export(
    text: *const c_char,
    dir: *const c_char,
    options_json: *const c_char,
) -> PlandocResult {
    let text = match read_str(text, "text") {
        Ok(s) => s,
        Err(e) => return PlandocResult::error(e),
    };
    let dir = match read_str(dir, "directory") {
        Ok(s) => s,
        Err(e) => return PlandocResult::error(e),
    };
    let options = if options_json.is_null() {
        Ok(PlanOptions::default())
    } else {
        read_str(options_json, "options")
            .and_then(|json| PlanOptions::from_json_str(json).map_err(|e| e.to_string()))
    };

    match options {
        Ok(options) => export_internal(text, Path::new(dir), options),
        Err(e) => PlandocResult::error(e),
    }
}

fn export_internal(text: &str, dir: &Path, options: PlanOptions) -> PlandocResult {
    let mut session = match PlanSession::new(options) {
        Ok(session) => session,
        Err(e) => return PlandocResult::error(e.to_string()),
    };
    session.load(text);

    let mut sink = DirectorySink::new(dir);
    let today = chrono::Local::now().date_naive();
    match session.export(&mut sink, today) {
        ExportStatus::Saved(saved) => {
            let path = saved.path.unwrap_or_else(|| dir.join(&saved.filename));
            PlandocResult::success(path.display().to_string())
        }
        ExportStatus::Busy => PlandocResult::error("Export already in progress".to_string()),
        ExportStatus::Failed(notice) => PlandocResult::error(format!("{} ({})", notice.message, notice.detail)),
    }
}

/// Free a result returned by a plandoc function.
///
/// # Safety
///
/// The `result` must have been returned by a plandoc function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn plandoc_free_result(result: PlandocResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by plandoc.
///
/// # Safety
///
/// The `ptr` must have been allocated by plandoc.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn plandoc_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the plandoc library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn plandoc_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let version = plandoc_version();
        assert!(!version.is_null());
    }

    #[test]
    fn test_null_text() {
        unsafe {
            let result = plandoc_to_html(ptr::null(), false);
            assert!(!result.success);
            assert!(!result.error.is_null());
            plandoc_free_result(result);
        }
    }

    #[test]
    fn test_to_html() {
        let text = CString::new("# Plan\n- item").unwrap();
        unsafe {
            let result = plandoc_to_html(text.as_ptr(), true);
            assert!(result.success);
            let html = CStr::from_ptr(result.data).to_str().unwrap();
            assert!(html.contains(">Plan</h1>"));
            plandoc_free_result(result);
        }
    }

    #[test]
    fn test_page_count() {
        let text = CString::new("Hello").unwrap();
        unsafe {
            assert_eq!(plandoc_page_count(text.as_ptr()), 1);
            assert_eq!(plandoc_page_count(ptr::null()), -1);
        }
    }

    #[test]
    fn test_export_into_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let text = CString::new("# Plan").unwrap();
        let dir_str = CString::new(dir.path().to_str().unwrap()).unwrap();
        unsafe {
            let result = plandoc_export(text.as_ptr(), dir_str.as_ptr(), ptr::null());
            assert!(result.success);
            let path = CStr::from_ptr(result.data).to_str().unwrap().to_string();
            assert!(path.ends_with(".pdf"));
            assert!(Path::new(&path).exists());
            plandoc_free_result(result);
        }
    }
}
