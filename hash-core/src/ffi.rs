//! C-API bindings.
//!
//! Exposes the eight public operations to C/C++ via FFI with pointer
//! validation and panic boundaries. Every function follows the same
//! pattern: validate pointers, run the real work inside `catch_unwind` (a
//! panic should never occur on well-formed input, but unwinding across an
//! `extern "C"` boundary is undefined behavior, so this is the last line of
//! defense), and report outcomes via a numeric status code rather than a
//! Rust `Result`.
//!
//! Status codes: `0` success, `-1` invalid argument (null pointer), `-2`
//! the Rust side panicked.

#![allow(unsafe_code)]

use crate::streaming::HashState;
use std::panic::catch_unwind;
use std::ptr;

const STATUS_OK: i32 = 0;
const STATUS_INVALID: i32 = -1;
const STATUS_PANIC: i32 = -2;

/// Sum of `len` bytes starting at `data`.
///
/// # Safety
/// `data` must be valid for reads of `len` bytes, or `len` must be 0.
#[no_mangle]
pub unsafe extern "C" fn voltahash_bytesum(data: *const u8, len: usize, out: *mut u64) -> i32 {
    if out.is_null() || (data.is_null() && len != 0) {
        return STATUS_INVALID;
    }
    let result = catch_unwind(|| {
        let slice = if len == 0 {
            &[][..]
        } else {
            std::slice::from_raw_parts(data, len)
        };
        crate::bytesum(slice)
    });
    match result {
        Ok(sum) => {
            ptr::write(out, sum);
            STATUS_OK
        }
        Err(_) => STATUS_PANIC,
    }
}

/// Hash `len` bytes starting at `data` under `seed`.
///
/// # Safety
/// `data` must be valid for reads of `len` bytes, or `len` must be 0.
#[no_mangle]
pub unsafe extern "C" fn voltahash_hash(
    data: *const u8,
    len: usize,
    seed: u64,
    out: *mut u64,
) -> i32 {
    if out.is_null() || (data.is_null() && len != 0) {
        return STATUS_INVALID;
    }
    let result = catch_unwind(|| {
        let slice = if len == 0 {
            &[][..]
        } else {
            std::slice::from_raw_parts(data, len)
        };
        crate::hash(slice, seed)
    });
    match result {
        Ok(digest) => {
            ptr::write(out, digest);
            STATUS_OK
        }
        Err(_) => STATUS_PANIC,
    }
}

/// Fill `len` bytes starting at `out` with pseudo-random output derived
/// from `nonce`.
///
/// # Safety
/// `out` must be valid for writes of `len` bytes, or `len` must be 0.
#[no_mangle]
pub unsafe extern "C" fn voltahash_generate(out: *mut u8, len: usize, nonce: u64) -> i32 {
    if out.is_null() && len != 0 {
        return STATUS_INVALID;
    }
    let result = catch_unwind(|| {
        let slice = if len == 0 {
            &mut [][..]
        } else {
            std::slice::from_raw_parts_mut(out, len)
        };
        crate::generate(slice, nonce);
    });
    match result {
        Ok(()) => STATUS_OK,
        Err(_) => STATUS_PANIC,
    }
}

/// Opaque handle to a streaming hash state.
pub struct VoltahashState {
    inner: HashState,
}

/// Allocate a new streaming state seeded with `seed`.
#[no_mangle]
pub extern "C" fn voltahash_state_new(seed: u64) -> *mut VoltahashState {
    Box::into_raw(Box::new(VoltahashState {
        inner: HashState::new(seed),
    }))
}

/// Absorb `len` bytes starting at `data` into `state`.
///
/// # Safety
/// `state` must be a live pointer returned by `voltahash_state_new` and not
/// yet freed. `data` must be valid for reads of `len` bytes, or `len` must
/// be 0.
#[no_mangle]
pub unsafe extern "C" fn voltahash_state_update(
    state: *mut VoltahashState,
    data: *const u8,
    len: usize,
) -> i32 {
    if state.is_null() || (data.is_null() && len != 0) {
        return STATUS_INVALID;
    }
    let result = catch_unwind(|| {
        let slice = if len == 0 {
            &[][..]
        } else {
            std::slice::from_raw_parts(data, len)
        };
        (*state).inner.update(slice);
    });
    match result {
        Ok(()) => STATUS_OK,
        Err(_) => STATUS_PANIC,
    }
}

/// Read the current digest of `state` without mutating it.
///
/// # Safety
/// `state` must be a live pointer returned by `voltahash_state_new` and not
/// yet freed.
#[no_mangle]
pub unsafe extern "C" fn voltahash_state_digest(state: *const VoltahashState, out: *mut u64) -> i32 {
    if state.is_null() || out.is_null() {
        return STATUS_INVALID;
    }
    let result = catch_unwind(|| (*state).inner.digest());
    match result {
        Ok(digest) => {
            ptr::write(out, digest);
            STATUS_OK
        }
        Err(_) => STATUS_PANIC,
    }
}

/// Compare two states per [`HashState::equal`]'s semantics (ignores pending
/// tail bytes). Writes `1` or `0` to `out`.
///
/// # Safety
/// Both pointers must be live and returned by `voltahash_state_new`.
#[no_mangle]
pub unsafe extern "C" fn voltahash_state_equal(
    a: *const VoltahashState,
    b: *const VoltahashState,
    out: *mut i32,
) -> i32 {
    if a.is_null() || b.is_null() || out.is_null() {
        return STATUS_INVALID;
    }
    let result = catch_unwind(|| HashState::equal(&(*a).inner, &(*b).inner));
    match result {
        Ok(eq) => {
            ptr::write(out, i32::from(eq));
            STATUS_OK
        }
        Err(_) => STATUS_PANIC,
    }
}

/// Free a state previously returned by `voltahash_state_new`. A null
/// pointer is a no-op.
///
/// # Safety
/// `state` must either be null or a pointer returned by
/// `voltahash_state_new` that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn voltahash_state_free(state: *mut VoltahashState) {
    if !state.is_null() {
        drop(Box::from_raw(state));
    }
}

/// Copy the active backend's name (NUL-terminated) into `buf`, truncating
/// if it doesn't fit. Returns the untruncated name's length in bytes (not
/// including the terminator).
///
/// # Safety
/// `buf` must be valid for writes of `buf_len` bytes, or `buf_len` must be 0.
#[no_mangle]
pub unsafe extern "C" fn voltahash_active_backend(buf: *mut u8, buf_len: usize) -> usize {
    let name = crate::active_backend();
    if buf_len == 0 || buf.is_null() {
        return name.len();
    }
    let copy_len = name.len().min(buf_len - 1);
    ptr::copy_nonoverlapping(name.as_ptr(), buf, copy_len);
    ptr::write(buf.add(copy_len), 0);
    name.len()
}
