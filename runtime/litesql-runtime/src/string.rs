///
/// lsqlString Handle Support
///
/// C-callable lifecycle for the dynamic string handle. The handle holds one
/// pointer to an exact-fit, null-terminated heap buffer; a null pointer means
/// the handle is not live. Delete clears the pointer so a stale handle is
/// inert rather than dangling.
///
/// Allocations are sized exactly to content plus terminator, which lets the
/// deallocation layout be re-derived from the terminator alone.
///
use std::alloc::{alloc, dealloc, Layout};
use std::ffi::{c_char, c_int, CStr};
use std::ptr;

/// Operation completed.
pub const LSQL_OK: c_int = 0;
/// The allocator could not satisfy the request; the destination is unchanged.
pub const LSQL_ERR_ALLOC: c_int = -1;
/// A null or non-live handle (or null source text) was passed.
pub const LSQL_ERR_ARG: c_int = -2;

/// A dynamic string handle as seen from C.
#[repr(C)]
pub struct LsqlString {
    pub data: *mut u8,
}

/// Allocate an exact-fit buffer holding `text` plus a terminator.
/// Returns null if the allocator refuses.
unsafe fn raw_from_bytes(text: &[u8]) -> *mut u8 {
    let layout = match Layout::from_size_align(text.len() + 1, 1) {
        Ok(layout) => layout,
        Err(_) => return ptr::null_mut(),
    };

    let data = unsafe { alloc(layout) };
    if data.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        if !text.is_empty() {
            ptr::copy_nonoverlapping(text.as_ptr(), data, text.len());
        }
        *data.add(text.len()) = 0;
    }

    data
}

/// Content bytes of a live buffer, up to but excluding the terminator.
unsafe fn content(data: *const u8) -> &'static [u8] {
    unsafe { CStr::from_ptr(data as *const c_char).to_bytes() }
}

/// Release a buffer produced by `raw_from_bytes`. The layout is re-derived
/// from the terminator, which is exact because allocations are exact-fit.
unsafe fn raw_free(data: *mut u8) {
    unsafe {
        let total = content(data).len() + 1;
        let layout = Layout::from_size_align(total, 1).unwrap();
        dealloc(data, layout);
    }
}

/// Initialize a handle into a valid empty string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lsql_string_new(s: *mut LsqlString) -> c_int {
    if s.is_null() {
        return LSQL_ERR_ARG;
    }

    let data = unsafe { raw_from_bytes(&[]) };
    if data.is_null() {
        return LSQL_ERR_ALLOC;
    }

    unsafe {
        (*s).data = data;
    }
    LSQL_OK
}

/// Replace a live handle's content with a copy of the C string `src`.
/// The old allocation is released only after the new one is in place.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lsql_string_copy(dst: *mut LsqlString, src: *const c_char) -> c_int {
    if dst.is_null() || src.is_null() {
        return LSQL_ERR_ARG;
    }

    unsafe {
        if (*dst).data.is_null() {
            return LSQL_ERR_ARG;
        }

        let text = CStr::from_ptr(src).to_bytes();
        let data = raw_from_bytes(text);
        if data.is_null() {
            return LSQL_ERR_ALLOC;
        }

        raw_free((*dst).data);
        (*dst).data = data;
    }
    LSQL_OK
}

/// Append the content of `src` onto `dst`, sizing the new allocation to
/// exactly the combined length plus terminator. `src` is not altered; on
/// failure `dst` keeps its prior content. `src` may alias `dst`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lsql_string_cat(dst: *mut LsqlString, src: *const LsqlString) -> c_int {
    if dst.is_null() || src.is_null() {
        return LSQL_ERR_ARG;
    }

    unsafe {
        if (*dst).data.is_null() || (*src).data.is_null() {
            return LSQL_ERR_ARG;
        }

        let head = content((*dst).data);
        let tail = content((*src).data);
        let total = head.len() + tail.len() + 1;

        let layout = match Layout::from_size_align(total, 1) {
            Ok(layout) => layout,
            Err(_) => return LSQL_ERR_ALLOC,
        };
        let data = alloc(layout);
        if data.is_null() {
            return LSQL_ERR_ALLOC;
        }

        ptr::copy_nonoverlapping(head.as_ptr(), data, head.len());
        ptr::copy_nonoverlapping(tail.as_ptr(), data.add(head.len()), tail.len());
        *data.add(head.len() + tail.len()) = 0;

        raw_free((*dst).data);
        (*dst).data = data;
    }
    LSQL_OK
}

/// Content length in bytes, excluding the terminator. 0 for a null or
/// non-live handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lsql_string_size(s: *const LsqlString) -> usize {
    if s.is_null() {
        return 0;
    }
    unsafe {
        if (*s).data.is_null() {
            0
        } else {
            content((*s).data).len()
        }
    }
}

/// Release a handle's allocation and clear its pointer. A cleared handle is
/// inert: subsequent operations report LSQL_ERR_ARG instead of touching
/// freed memory.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lsql_string_delete(s: *mut LsqlString) {
    if s.is_null() {
        return;
    }
    unsafe {
        if !(*s).data.is_null() {
            raw_free((*s).data);
            (*s).data = ptr::null_mut();
        }
    }
}
