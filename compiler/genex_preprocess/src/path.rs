/// Whether `path` is absolute on any host: `/x`, `~/x`, `C:/x`, `C:\x`,
/// or a `\\server` UNC path.
pub fn is_full_path(path: &str) -> bool {
    match path.as_bytes() {
        [b'/' | b'~', ..] | [b'\\', b'\\', ..] => true,
        [drive, b':', b'/' | b'\\', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Whether `name` may name a target: one or more of `A-Z a-z 0-9 _ . : + -`.
///
/// `:` is allowed for namespaced imported targets such as `Qt5::Core`.
pub fn is_valid_target_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b':' | b'+' | b'-'))
}
