//! Platform-name collaborator
//!
//! Consumed by the host shell (window titles, logging); the switching core
//! itself never reads the platform name.

/// Zero-argument platform identifier query.
pub fn platform_name() -> &'static str {
    if cfg!(target_os = "macos") {
        "macOS"
    } else if cfg!(target_os = "windows") {
        "Windows"
    } else if cfg!(target_os = "linux") {
        "Linux"
    } else if cfg!(target_os = "android") {
        "Android"
    } else if cfg!(target_os = "ios") {
        "iOS"
    } else {
        "Unknown"
    }
}
