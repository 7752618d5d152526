use crate::Result;

/// Somewhere to put the encoded account id so the user can paste it
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard
///
/// On X11 and Wayland the owning process serves the contents, so the handle is
/// kept until this value is dropped.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        use crate::PsnAuthError;

        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => self.inner.insert(
                arboard::Clipboard::new()
                    .map_err(|e| PsnAuthError::ClipboardWriteFailed(e.to_string()))?,
            ),
        };
        clipboard
            .set_text(text)
            .map_err(|e| PsnAuthError::ClipboardWriteFailed(e.to_string()))
    }
}

/// Used when the crate is built without clipboard support
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(crate::PsnAuthError::ClipboardWriteFailed(
            "built without clipboard support".to_string(),
        ))
    }
}
