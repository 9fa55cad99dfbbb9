/// Type alias for Result with anyhow::Error as the error type.
/// Every layer of pombump returns this; typed failures live in [`super::error::PomBumpError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
