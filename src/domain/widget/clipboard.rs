use crate::domain::DomainError;

/// Destination for "copy" actions
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), DomainError>;
}
