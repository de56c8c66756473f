// Default configuration constants

/// Default inference backend name.
pub const DEFAULT_BACKEND: &str = "onnx";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default log format.
pub const DEFAULT_LOG_FORMAT: &str = "compact";
/// Default log output target.
pub const DEFAULT_LOG_OUTPUT: &str = "stdout";
