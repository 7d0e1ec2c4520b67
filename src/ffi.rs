//! FFI bindings for fittrack
//!
//! This module provides C-compatible functions for calling fittrack from other
//! languages. Strings cross the boundary null-terminated; every string returned
//! here is allocated by Rust and must be released with `fittrack_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::pipeline::{training_to_json, training_to_text, TrainingProcessor};
use crate::report::show_training_info;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

// ============================================================================
// Stateless API
// ============================================================================

/// Render the text report from scalar parameters.
///
/// # Safety
/// - `training_type` must be a valid null-terminated UTF-8 C string.
/// - Returns a newly allocated string that must be freed with `fittrack_free_string`.
/// - Returns NULL if `training_type` is invalid; call `fittrack_last_error` for details.
#[no_mangle]
pub unsafe extern "C" fn fittrack_show_training_info(
    action: i64,
    training_type: *const c_char,
    duration: f64,
    weight: f64,
    height: f64,
    length_pool: i64,
    count_pool: i64,
) -> *mut c_char {
    clear_last_error();

    let kind = match cstr_to_string(training_type) {
        Some(s) => s,
        None => {
            set_last_error("Invalid training type string pointer");
            return ptr::null_mut();
        }
    };

    let text = show_training_info(
        action,
        &kind,
        duration,
        weight,
        height,
        length_pool,
        count_pool,
    );
    string_to_cstr(&text)
}

/// Convert a JSON training record to the text report.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `fittrack_free_string`.
/// - Returns NULL on error; call `fittrack_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn fittrack_training_to_text(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match training_to_text(json_str) {
        Ok(text) => string_to_cstr(&text),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Convert a JSON training record to a JSON report.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `fittrack_free_string`.
/// - Returns NULL on error; call `fittrack_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn fittrack_training_to_json(json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match training_to_json(json_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Processor API
// ============================================================================

/// Opaque handle to a TrainingProcessor
pub struct TrainingProcessorHandle {
    processor: TrainingProcessor,
}

/// Create a new TrainingProcessor without a default profile.
///
/// # Safety
/// - Returns a pointer to a newly allocated processor.
/// - Must be freed with `fittrack_processor_free`.
#[no_mangle]
pub unsafe extern "C" fn fittrack_processor_new() -> *mut TrainingProcessorHandle {
    clear_last_error();

    let handle = Box::new(TrainingProcessorHandle {
        processor: TrainingProcessor::new(),
    });
    Box::into_raw(handle)
}

/// Free a TrainingProcessor.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `fittrack_processor_new`.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn fittrack_processor_free(processor: *mut TrainingProcessorHandle) {
    if !processor.is_null() {
        drop(Box::from_raw(processor));
    }
}

/// Load the processor's default profile from JSON.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `fittrack_processor_new`.
/// - `json` must be a valid null-terminated C string.
/// - Returns 0 on success, non-zero on error.
/// - On error, call `fittrack_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn fittrack_processor_load_profile(
    processor: *mut TrainingProcessorHandle,
    json: *const c_char,
) -> i32 {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return -1;
    }

    let handle = &mut *processor;

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return -1;
        }
    };

    match handle.processor.load_profile(&json_str) {
        Ok(()) => 0,
        Err(e) => {
            set_last_error(&e.to_string());
            -1
        }
    }
}

/// Render a JSON training record with the processor's profile.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `fittrack_processor_new`.
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `fittrack_free_string`.
/// - Returns NULL on error; call `fittrack_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn fittrack_processor_process_text(
    processor: *mut TrainingProcessorHandle,
    json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return ptr::null_mut();
    }

    let handle = &*processor;

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match handle.processor.process_text(&json_str) {
        Ok(text) => string_to_cstr(&text),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by fittrack functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a fittrack function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn fittrack_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The pointer is valid until the next fittrack call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn fittrack_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the fittrack library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn fittrack_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::UNKNOWN_TRAINING_MESSAGE;
    use std::ffi::CString;

    fn sample_running_json() -> CString {
        CString::new(r#"{"kind": "Бег", "action": 1000, "duration_hours": 1.0, "weight_kg": 70}"#)
            .unwrap()
    }

    #[test]
    fn test_ffi_show_training_info() {
        let kind = CString::new("Плавание").unwrap();

        unsafe {
            let result = fittrack_show_training_info(2000, kind.as_ptr(), 1.0, 70.0, 175.0, 25, 40);
            assert!(!result.is_null());

            let text = CStr::from_ptr(result).to_str().unwrap();
            assert!(text.starts_with("Тип тренировки: Плавание\n"));
            assert!(text.ends_with("Сожгли калорий: 294.00\n"));

            fittrack_free_string(result);
        }
    }

    #[test]
    fn test_ffi_unknown_kind() {
        let kind = CString::new("Теннис").unwrap();

        unsafe {
            let result = fittrack_show_training_info(1, kind.as_ptr(), 1.0, 1.0, 1.0, 0, 0);
            assert_eq!(CStr::from_ptr(result).to_str().unwrap(), UNKNOWN_TRAINING_MESSAGE);
            fittrack_free_string(result);
        }
    }

    #[test]
    fn test_ffi_training_to_text_and_json() {
        let json = sample_running_json();

        unsafe {
            let text = fittrack_training_to_text(json.as_ptr());
            assert!(!text.is_null());
            assert!(CStr::from_ptr(text)
                .to_str()
                .unwrap()
                .contains("Сожгли калорий: 87.96"));
            fittrack_free_string(text);

            let report = fittrack_training_to_json(json.as_ptr());
            assert!(!report.is_null());
            assert!(CStr::from_ptr(report)
                .to_str()
                .unwrap()
                .contains("report_version"));
            fittrack_free_string(report);
        }
    }

    #[test]
    fn test_ffi_processor_lifecycle() {
        unsafe {
            let processor = fittrack_processor_new();
            assert!(!processor.is_null());

            let profile = CString::new(r#"{"weight_kg": 80, "height_cm": 180}"#).unwrap();
            assert_eq!(fittrack_processor_load_profile(processor, profile.as_ptr()), 0);

            let record =
                CString::new(r#"{"kind": "Ходьба", "action": 20000, "duration_hours": 2.5}"#)
                    .unwrap();
            let result = fittrack_processor_process_text(processor, record.as_ptr());
            assert!(!result.is_null());
            assert!(CStr::from_ptr(result)
                .to_str()
                .unwrap()
                .ends_with("Сожгли калорий: 824.02\n"));

            fittrack_free_string(result);
            fittrack_processor_free(processor);
        }
    }

    #[test]
    fn test_ffi_error_handling() {
        unsafe {
            let invalid_json = CString::new("not json").unwrap();
            let result = fittrack_training_to_text(invalid_json.as_ptr());
            assert!(result.is_null());

            let error = fittrack_last_error();
            assert!(!error.is_null());
            assert!(!CStr::from_ptr(error).to_str().unwrap().is_empty());

            assert_eq!(
                fittrack_processor_load_profile(ptr::null_mut(), invalid_json.as_ptr()),
                -1
            );
            assert!(fittrack_show_training_info(1, ptr::null(), 1.0, 1.0, 1.0, 0, 0).is_null());
        }
    }

    #[test]
    fn test_ffi_version() {
        unsafe {
            let version = fittrack_version();
            assert!(!version.is_null());
            assert!(!CStr::from_ptr(version).to_str().unwrap().is_empty());
        }
    }
}
