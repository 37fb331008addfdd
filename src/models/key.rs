//! Access key wrapper
//!
//! SECURITY: The key takes ownership of the caller's buffer, so the only copy
//! lives here. The whole allocation is zeroed on drop and the key is never
//! shown by `Debug`/`Display`.

use std::fmt;

/// Anonymous access key for the backend project
#[derive(Clone, PartialEq, Eq)]
pub struct AnonKey(String);

impl AnonKey {
    /// Take ownership of `key`, trimming surrounding whitespace in place
    pub fn new(mut key: String) -> Self {
        let end = key.trim_end().len();
        key.truncate(end);
        let start = key.len() - key.trim_start().len();
        key.drain(..start);
        AnonKey(key)
    }

    /// Get the key as a string slice
    ///
    /// Use this only when handing the key to the client.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Drop for AnonKey {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8, and the spare capacity is only
        // written through MaybeUninit, never read
        unsafe {
            let bytes = self.0.as_mut_vec();
            for byte in bytes.iter_mut() {
                std::ptr::write_volatile(byte, 0);
            }
            // Trimming shifts bytes left; stale copies can sit past `len`
            for slot in bytes.spare_capacity_mut() {
                std::ptr::write_volatile(slot.as_mut_ptr(), 0);
            }
        }
    }
}

impl fmt::Debug for AnonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnonKey(<redacted>)")
    }
}

impl fmt::Display for AnonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
