//! C-ABI FFI bindings for cross-language integration.
//!
//! This module lets a front end written in another language (C#, Python,
//! Node.js, a WebView host) own a document through an opaque handle and
//! drive it with the same operations the Rust API exposes.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{JsonFormat, WriteOptions};
use crate::{render, Error, TabularDocument};

/// Status code: operation succeeded.
pub const CSVDOC_OK: i32 = 0;
/// Status code: null pointer or non-UTF-8 argument.
pub const CSVDOC_INVALID_INPUT: i32 = -1;
/// Status code: row index does not exist.
pub const CSVDOC_INDEX_OUT_OF_RANGE: i32 = -2;

/// Opaque document handle. Free with `csvdoc_free`.
pub struct CsvdocHandle {
    doc: TabularDocument,
}

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct CsvdocResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `csvdoc_free_string`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `csvdoc_free_string`.
    pub error: *mut c_char,
}

impl CsvdocResult {
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

unsafe fn str_arg<'a>(arg: *const c_char) -> Option<&'a str> {
    if arg.is_null() {
        return None;
    }
    CStr::from_ptr(arg).to_str().ok()
}

fn status(result: crate::Result<()>) -> i32 {
    match result {
        Ok(()) => CSVDOC_OK,
        Err(Error::IndexOutOfRange { .. }) => CSVDOC_INDEX_OUT_OF_RANGE,
        Err(_) => CSVDOC_INVALID_INPUT,
    }
}

/// Parse CSV text into a new document.
///
/// Returns null if `text` is null or not UTF-8.
///
/// # Safety
///
/// The `text` must be null or a valid null-terminated string.
/// The returned handle must be freed with `csvdoc_free`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_parse(text: *const c_char) -> *mut CsvdocHandle {
    let Some(text) = str_arg(text) else {
        return ptr::null_mut();
    };

    match crate::parse_str(text) {
        Ok(doc) => Box::into_raw(Box::new(CsvdocHandle { doc })),
        Err(e) => {
            log::warn!("csvdoc_parse failed: {}", e);
            ptr::null_mut()
        }
    }
}

/// Create a new empty document. Free it with `csvdoc_free`.
#[no_mangle]
pub extern "C" fn csvdoc_new() -> *mut CsvdocHandle {
    Box::into_raw(Box::new(CsvdocHandle {
        doc: TabularDocument::new(),
    }))
}

/// Set the source file name used for the download name.
///
/// # Safety
///
/// `handle` must come from `csvdoc_parse`/`csvdoc_new`; `name` must be a
/// valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_set_source_name(
    handle: *mut CsvdocHandle,
    name: *const c_char,
) -> i32 {
    let (Some(handle), Some(name)) = (handle.as_mut(), str_arg(name)) else {
        return CSVDOC_INVALID_INPUT;
    };
    handle.doc.set_source_name(name);
    CSVDOC_OK
}

/// Append an empty row. Returns the new row index, or -1 on a null handle.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_add_row(handle: *mut CsvdocHandle) -> i64 {
    match handle.as_mut() {
        Some(handle) => handle.doc.add_row() as i64,
        None => CSVDOC_INVALID_INPUT as i64,
    }
}

/// Delete the row at `index`.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_delete_row(handle: *mut CsvdocHandle, index: usize) -> i32 {
    match handle.as_mut() {
        Some(handle) => status(handle.doc.delete_row(index).map(|_| ())),
        None => CSVDOC_INVALID_INPUT,
    }
}

/// Set one cell value.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
/// `column` and `value` must be valid null-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_set_cell(
    handle: *mut CsvdocHandle,
    row: usize,
    column: *const c_char,
    value: *const c_char,
) -> i32 {
    let (Some(handle), Some(column), Some(value)) =
        (handle.as_mut(), str_arg(column), str_arg(value))
    else {
        return CSVDOC_INVALID_INPUT;
    };
    status(handle.doc.set_cell(row, column, value))
}

/// Get the number of rows. Returns -1 on a null handle.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_row_count(handle: *const CsvdocHandle) -> i64 {
    match handle.as_ref() {
        Some(handle) => handle.doc.row_count() as i64,
        None => CSVDOC_INVALID_INPUT as i64,
    }
}

/// Serialize the document to CSV.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
/// The returned result must be freed with `csvdoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_serialize(handle: *const CsvdocHandle, crlf: bool) -> CsvdocResult {
    let Some(handle) = handle.as_ref() else {
        return CsvdocResult::error("Handle cannot be null".to_string());
    };

    let mut options = WriteOptions::default();
    if crlf {
        options = options.crlf();
    }

    match render::to_csv(&handle.doc, &options) {
        Ok(csv) => CsvdocResult::success(csv),
        Err(e) => CsvdocResult::error(e.to_string()),
    }
}

/// Get the columns and rows as JSON for rendering.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
/// The returned result must be freed with `csvdoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_to_json(handle: *const CsvdocHandle, pretty: bool) -> CsvdocResult {
    let Some(handle) = handle.as_ref() else {
        return CsvdocResult::error("Handle cannot be null".to_string());
    };

    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    match render::to_json(&handle.doc, format) {
        Ok(json) => CsvdocResult::success(json),
        Err(e) => CsvdocResult::error(e.to_string()),
    }
}

/// Get the file name to save the document under.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`.
/// The returned result must be freed with `csvdoc_free_result`.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_download_name(handle: *const CsvdocHandle) -> CsvdocResult {
    match handle.as_ref() {
        Some(handle) => CsvdocResult::success(handle.doc.download_name().to_string()),
        None => CsvdocResult::error("Handle cannot be null".to_string()),
    }
}

/// Free a document handle.
///
/// # Safety
///
/// `handle` must be null or come from `csvdoc_parse`/`csvdoc_new`, and must
/// not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_free(handle: *mut CsvdocHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Free a result returned by any csvdoc function.
///
/// # Safety
///
/// The `result` must have been returned by a csvdoc function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_free_result(result: CsvdocResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by csvdoc.
///
/// # Safety
///
/// The `ptr` must have been allocated by csvdoc.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn csvdoc_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the csvdoc library.
///
/// # Safety
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn csvdoc_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
