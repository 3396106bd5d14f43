use async_trait::async_trait;
use tracing::error;

use crate::error::ClipboardError;
use crate::page::toast::Severity;

pub const COPY_SUCCESS_MESSAGE: &str = "Texto copiado al portapapeles";
pub const COPY_FAILURE_MESSAGE: &str = "Error al copiar texto";

/// Platform clipboard access.
#[async_trait(?Send)]
pub trait ClipboardBackend {
    /// Whether the asynchronous clipboard API exists.
    async fn platform_available(&self) -> bool;

    async fn write_platform(&self, text: &str) -> Result<(), ClipboardError>;

    /// Hidden-textarea select and copy command.
    async fn copy_legacy(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Platform,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    Failed(CopyPath, ClipboardError),
}

impl CopyOutcome {
    /// Notification reporting the outcome.
    #[must_use]
    pub fn notification(&self) -> (&'static str, Severity) {
        match self {
            CopyOutcome::Copied(_) => (COPY_SUCCESS_MESSAGE, Severity::Success),
            CopyOutcome::Failed(..) => (COPY_FAILURE_MESSAGE, Severity::Error),
        }
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Copies `text`, falling back to the legacy copy command when the platform
/// clipboard API is missing.
pub async fn copy_to_clipboard<B>(backend: &B, text: &str) -> CopyOutcome
where
    B: ClipboardBackend + ?Sized,
{
    let path = if backend.platform_available().await {
        CopyPath::Platform
    } else {
        CopyPath::Legacy
    };
    let result = match path {
        CopyPath::Platform => backend.write_platform(text).await,
        CopyPath::Legacy => backend.copy_legacy(text).await,
    };
    match result {
        Ok(()) => CopyOutcome::Copied(path),
        Err(err) => {
            error!(?path, %err, "clipboard copy failed");
            CopyOutcome::Failed(path, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeClipboard {
        platform: bool,
        platform_result: Result<(), ClipboardError>,
        legacy_result: Result<(), ClipboardError>,
        written: RefCell<Vec<(CopyPath, String)>>,
    }

    impl FakeClipboard {
        fn new(platform: bool) -> Self {
            Self {
                platform,
                platform_result: Ok(()),
                legacy_result: Ok(()),
                written: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ClipboardBackend for FakeClipboard {
        async fn platform_available(&self) -> bool {
            self.platform
        }

        async fn write_platform(&self, text: &str) -> Result<(), ClipboardError> {
            self.written
                .borrow_mut()
                .push((CopyPath::Platform, text.to_string()));
            self.platform_result.clone()
        }

        async fn copy_legacy(&self, text: &str) -> Result<(), ClipboardError> {
            self.written
                .borrow_mut()
                .push((CopyPath::Legacy, text.to_string()));
            self.legacy_result.clone()
        }
    }

    #[tokio::test]
    async fn platform_success() {
        let clipboard = FakeClipboard::new(true);
        let outcome = copy_to_clipboard(&clipboard, "AF-1020").await;
        assert_eq!(outcome, CopyOutcome::Copied(CopyPath::Platform));
        assert_eq!(outcome.notification(), (COPY_SUCCESS_MESSAGE, Severity::Success));
        assert_eq!(
            clipboard.written.borrow().as_slice(),
            &[(CopyPath::Platform, "AF-1020".to_string())]
        );
    }

    #[tokio::test]
    async fn platform_failure_reports_error_without_fallback() {
        let mut clipboard = FakeClipboard::new(true);
        clipboard.platform_result = Err(ClipboardError::Rejected("denied".into()));
        let outcome = copy_to_clipboard(&clipboard, "x").await;
        assert!(!outcome.is_copied());
        assert_eq!(outcome.notification().1, Severity::Error);
        assert_eq!(clipboard.written.borrow().len(), 1);
    }

    #[tokio::test]
    async fn missing_platform_uses_legacy_copy() {
        let mut clipboard = FakeClipboard::new(false);
        assert_eq!(
            copy_to_clipboard(&clipboard, "x").await,
            CopyOutcome::Copied(CopyPath::Legacy)
        );
        clipboard.legacy_result = Err(ClipboardError::LegacyCopyFailed);
        assert_eq!(
            copy_to_clipboard(&clipboard, "x").await,
            CopyOutcome::Failed(CopyPath::Legacy, ClipboardError::LegacyCopyFailed)
        );
    }
}
