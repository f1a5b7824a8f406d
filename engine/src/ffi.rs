//! FFI layer for browser and native hosts.
//!
//! This module provides C-compatible functions that a host (a wasm shim
//! in the browser, or a native shell) calls to drive the employee form.
//! All data crosses the boundary as JSON strings.
//!
//! The handle keeps the persisted list in a [`MemoryStorage`]; after every
//! mutating call the host reads it back with `roster_form_persisted` and
//! mirrors it into its own session storage.
//!
//! # Memory Management
//!
//! - Strings returned by `roster_*` functions are allocated by Rust
//! - Caller must free them with `roster_string_free`
//! - Form handles must be freed with `roster_form_free`
//!
//! # Error Handling
//!
//! Functions return JSON with either:
//! - `{"ok": <result>}` on success
//! - `{"error": "<message>"}` on failure

use crate::{
    page::PageShell, storage::MemoryStorage, view, EmployeeForm, RecordStore, RosterConfig,
    SessionStorage,
};
use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// An employee form with its configuration, owned by the host.
#[derive(Debug)]
pub struct RosterHandle {
    form: EmployeeForm<MemoryStorage>,
    config: RosterConfig,
}

/// Result wrapper for FFI responses.
#[derive(serde::Serialize)]
#[serde(untagged)]
enum FfiResult<T: serde::Serialize> {
    Ok { ok: T },
    Err { error: String },
}

impl<T: serde::Serialize> FfiResult<T> {
    fn ok(value: T) -> Self {
        FfiResult::Ok { ok: value }
    }

    fn err(message: impl Into<String>) -> Self {
        FfiResult::Err {
            error: message.into(),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialization failed: {}"}}"#, e))
    }
}

fn error_json(message: impl Into<String>) -> *mut c_char {
    to_c_string(FfiResult::<()>::err(message).to_json())
}

/// Convert a Rust string to a C string pointer.
/// Caller must free with `roster_string_free`.
fn to_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => c"{\"error\":\"string contained null bytes\"}"
            .to_owned()
            .into_raw(),
    }
}

/// Convert a C string pointer to a Rust string.
/// Returns None if pointer is null or invalid UTF-8.
unsafe fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

// ============================================================================
// Form Lifecycle
// ============================================================================

/// Create a form handle and load its record list.
///
/// # Arguments
/// - `config_json`: JSON string of RosterConfig, or null for defaults
/// - `persisted_json`: the host's current session storage value for the
///   configured key, or null when there is none
///
/// # Returns
/// Pointer to RosterHandle, or null on failure.
///
/// # Safety
/// - `config_json` and `persisted_json` must be valid null-terminated C strings or null
/// - Caller must free the returned pointer with `roster_form_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_new(
    config_json: *const c_char,
    persisted_json: *const c_char,
) -> *mut RosterHandle {
    let config = match from_c_string(config_json) {
        Some(s) => match serde_json::from_str::<RosterConfig>(&s) {
            Ok(c) => c,
            Err(_) => return ptr::null_mut(),
        },
        None => RosterConfig::default(),
    };

    let storage = match from_c_string(persisted_json) {
        Some(s) => MemoryStorage::with_item(config.storage_key.clone(), s),
        None => MemoryStorage::new(),
    };

    let store = match RecordStore::load(storage, &config) {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    Box::into_raw(Box::new(RosterHandle {
        form: EmployeeForm::new(store),
        config,
    }))
}

/// Free a form handle.
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new`
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn roster_form_free(handle: *mut RosterHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Free a string allocated by the engine.
///
/// # Safety
/// - `s` must be a valid pointer from a `roster_*` function
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn roster_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ============================================================================
// Form Operations
// ============================================================================

/// Overwrite one draft field.
///
/// # Arguments
/// - `field`: form field name, e.g. `firstName`
/// - `value`: new value
///
/// # Returns
/// JSON string: `{"ok": null}` or `{"error": "message"}`
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - `field` and `value` must be valid null-terminated C strings or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_set_field(
    handle: *mut RosterHandle,
    field: *const c_char,
    value: *const c_char,
) -> *mut c_char {
    let handle = match handle.as_mut() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    let field_str = match from_c_string(field) {
        Some(s) => s,
        None => return error_json("invalid field"),
    };

    let value_str = match from_c_string(value) {
        Some(s) => s,
        None => return error_json("invalid value"),
    };

    match handle.form.set_field_by_name(&field_str, value_str) {
        Ok(()) => to_c_string(FfiResult::ok(()).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

/// Load a record into the draft for editing.
///
/// # Returns
/// JSON string: `{"ok": FormDraft}` or `{"error": "message"}`
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - `id` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_start_edit(
    handle: *mut RosterHandle,
    id: *const c_char,
) -> *mut c_char {
    let handle = match handle.as_mut() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    let id_str = match from_c_string(id) {
        Some(s) => s,
        None => return error_json("invalid id"),
    };

    match handle.form.start_edit(&id_str) {
        Ok(()) => to_c_string(FfiResult::ok(handle.form.draft()).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

/// Submit the draft.
///
/// # Returns
/// JSON string: `{"ok": SubmitOutcome}` or `{"error": "message"}`.
/// A draft that fails validation is `{"ok": {"outcome": "rejected", ...}}`.
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_submit(handle: *mut RosterHandle) -> *mut c_char {
    let handle = match handle.as_mut() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    match handle.form.submit() {
        Ok(outcome) => to_c_string(FfiResult::ok(outcome).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

/// Delete a record.
///
/// # Returns
/// JSON string: `{"ok": null}` or `{"error": "message"}`
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - `id` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_remove(
    handle: *mut RosterHandle,
    id: *const c_char,
) -> *mut c_char {
    let handle = match handle.as_mut() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    let id_str = match from_c_string(id) {
        Some(s) => s,
        None => return error_json("invalid id"),
    };

    match handle.form.remove(&id_str) {
        Ok(()) => to_c_string(FfiResult::ok(()).to_json()),
        Err(e) => error_json(e.to_string()),
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Get all records in store order.
///
/// # Returns
/// JSON string: `{"ok": [EmployeeRecord, ...]}` or `{"error": "message"}`
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_records(handle: *const RosterHandle) -> *mut c_char {
    let handle = match handle.as_ref() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    to_c_string(FfiResult::ok(handle.form.store().records()).to_json())
}

/// Get the persisted string for the host to mirror into session storage.
///
/// # Returns
/// JSON string: `{"ok": {"key": "...", "value": "[...]"}}` or `{"error": "message"}`
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_persisted(handle: *const RosterHandle) -> *mut c_char {
    let handle = match handle.as_ref() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    let store = handle.form.store();
    let value = store.storage().get_item(store.key());
    to_c_string(
        FfiResult::ok(serde_json::json!({ "key": store.key(), "value": value })).to_json(),
    )
}

/// Render the employee manager display tree.
///
/// # Returns
/// JSON string: `{"ok": Node}` or `{"error": "message"}`
///
/// # Safety
/// - `handle` must be a valid pointer from `roster_form_new` or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_form_render(handle: *const RosterHandle) -> *mut c_char {
    let handle = match handle.as_ref() {
        Some(h) => h,
        None => return error_json("null form handle"),
    };

    let tree = view::render_manager(&handle.form, &handle.config);
    to_c_string(FfiResult::ok(tree).to_json())
}

/// Render a page shell.
///
/// # Arguments
/// - `shell_json`: JSON string of PageShell
///
/// # Returns
/// JSON string: `{"ok": Node}` or `{"error": "message"}`
///
/// # Safety
/// - `shell_json` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `roster_string_free`
#[no_mangle]
pub unsafe extern "C" fn roster_page_render(shell_json: *const c_char) -> *mut c_char {
    let shell_str = match from_c_string(shell_json) {
        Some(s) => s,
        None => return error_json("invalid page shell JSON"),
    };

    match serde_json::from_str::<PageShell>(&shell_str) {
        Ok(shell) => to_c_string(FfiResult::ok(shell.render()).to_json()),
        Err(e) => error_json(format!("parse error: {}", e)),
    }
}

// ============================================================================
// Utility
// ============================================================================

/// Get the engine version.
///
/// # Returns
/// Static string pointer (do not free)
#[no_mangle]
pub extern "C" fn roster_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    unsafe fn take_json(ptr: *mut c_char) -> Value {
        let value = serde_json::from_str(CStr::from_ptr(ptr).to_str().unwrap()).unwrap();
        roster_string_free(ptr);
        value
    }

    unsafe fn set(handle: *mut RosterHandle, field: &str, value: &str) {
        let field = CString::new(field).unwrap();
        let value = CString::new(value).unwrap();
        let result = take_json(roster_form_set_field(handle, field.as_ptr(), value.as_ptr()));
        assert!(result.get("ok").is_some(), "{}", result);
    }

    unsafe fn fill(handle: *mut RosterHandle) {
        set(handle, "firstName", "Alice");
        set(handle, "lastName", "Lee");
        set(handle, "email", "a@b.com");
        set(handle, "phone", "1234567890");
        set(handle, "gender", "Female");
        set(handle, "department", "IT");
        set(handle, "designation", "Engineer");
        set(handle, "salary", "5000");
        set(handle, "joiningDate", "2024-01-01");
        set(handle, "image", "http://x/y.png");
        set(handle, "status", "Active");
    }

    #[test]
    fn ffi_form_lifecycle() {
        unsafe {
            let handle = roster_form_new(ptr::null(), ptr::null());
            assert!(!handle.is_null());

            let persisted = take_json(roster_form_persisted(handle));
            assert_eq!(persisted["ok"]["key"], "employees");
            assert_eq!(persisted["ok"]["value"], "[]");

            roster_form_free(handle);
        }
    }

    #[test]
    fn ffi_submit_edit_remove() {
        unsafe {
            let handle = roster_form_new(ptr::null(), ptr::null());
            fill(handle);

            let outcome = take_json(roster_form_submit(handle));
            assert_eq!(outcome["ok"]["outcome"], "added");
            let id = outcome["ok"]["id"].as_str().unwrap().to_string();
            let id_c = CString::new(id.clone()).unwrap();

            let draft = take_json(roster_form_start_edit(handle, id_c.as_ptr()));
            assert_eq!(draft["ok"]["firstName"], "Alice");

            set(handle, "department", "Finance");
            let outcome = take_json(roster_form_submit(handle));
            assert_eq!(outcome["ok"]["outcome"], "updated");

            let records = take_json(roster_form_records(handle));
            assert_eq!(records["ok"][0]["id"], id.as_str());
            assert_eq!(records["ok"][0]["department"], "Finance");
            assert_eq!(records["ok"][0]["salary"], "5000");

            let result = take_json(roster_form_remove(handle, id_c.as_ptr()));
            assert!(result.get("ok").is_some());

            let persisted = take_json(roster_form_persisted(handle));
            assert_eq!(persisted["ok"]["value"], "[]");

            roster_form_free(handle);
        }
    }

    #[test]
    fn ffi_rejected_submit() {
        unsafe {
            let handle = roster_form_new(ptr::null(), ptr::null());
            set(handle, "firstName", "Al");

            let outcome = take_json(roster_form_submit(handle));
            assert_eq!(outcome["ok"]["outcome"], "rejected");
            assert_eq!(
                outcome["ok"]["errors"]["firstName"],
                "First name must be at least 3 characters"
            );

            let tree = take_json(roster_form_render(handle));
            assert_eq!(tree["ok"]["kind"], "container");

            roster_form_free(handle);
        }
    }

    #[test]
    fn ffi_loads_persisted_list_and_config() {
        unsafe {
            let config = CString::new(r#"{"storageKey": "staff", "currencySymbol": "$"}"#).unwrap();
            let persisted = CString::new(
                r#"[{"id":"EMP5","firstName":"Alice","lastName":"Lee","email":"a@b.com",
                "phone":"1234567890","gender":"Female","department":"IT","designation":"Engineer",
                "salary":"5000","joiningDate":"2024-01-01","image":"http://x/y.png","status":"Active"}]"#,
            )
            .unwrap();

            let handle = roster_form_new(config.as_ptr(), persisted.as_ptr());
            assert!(!handle.is_null());

            let records = take_json(roster_form_records(handle));
            assert_eq!(records["ok"].as_array().unwrap().len(), 1);

            let out = take_json(roster_form_persisted(handle));
            assert_eq!(out["ok"]["key"], "staff");

            roster_form_free(handle);
        }
    }

    #[test]
    fn ffi_page_render() {
        unsafe {
            let shell = CString::new(
                r#"{"header": {"brand": "Acme"}, "faq": {"title": "FAQ"}, "footer": {"text": "bye"}}"#,
            )
            .unwrap();
            let tree = take_json(roster_page_render(shell.as_ptr()));
            assert_eq!(tree["ok"]["children"].as_array().unwrap().len(), 3);

            let bad = CString::new("nope").unwrap();
            let result = take_json(roster_page_render(bad.as_ptr()));
            assert!(result.get("error").is_some());
        }
    }

    #[test]
    fn ffi_version() {
        unsafe {
            let version = roster_version();
            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert_eq!(version_str, env!("CARGO_PKG_VERSION"));
        }
    }

    #[test]
    fn ffi_error_handling() {
        unsafe {
            // Null handle
            let result = take_json(roster_form_submit(ptr::null_mut()));
            assert!(result.get("error").is_some());

            // Bad config
            let config = CString::new("not valid json").unwrap();
            assert!(roster_form_new(config.as_ptr(), ptr::null()).is_null());

            // Unknown field and id
            let handle = roster_form_new(ptr::null(), ptr::null());
            let field = CString::new("nickname").unwrap();
            let value = CString::new("Ally").unwrap();
            let result = take_json(roster_form_set_field(handle, field.as_ptr(), value.as_ptr()));
            assert_eq!(result["error"], "unknown form field: nickname");

            let id = CString::new("EMP404").unwrap();
            let result = take_json(roster_form_remove(handle, id.as_ptr()));
            assert_eq!(result["error"], "record not found: EMP404");

            roster_form_free(handle);
        }
    }
}
