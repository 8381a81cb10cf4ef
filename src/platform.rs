//! Platform-specific key hints

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (the terminal swallows Cmd on macOS)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy hint shown on the product detail screen
/// - macOS: pbcopy-backed clipboard
/// - Linux: needs a running X11 or Wayland session
#[cfg(target_os = "macos")]
pub const COPY_HINT: &str = "y:copy image  v:copy video";

#[cfg(not(target_os = "macos"))]
pub const COPY_HINT: &str = "y/v:copy image/video (needs X11/Wayland)";
