//! System clipboard access through arboard.

use plandoc::{Clipboard, Error, Result};

/// Clipboard backed by the desktop clipboard.
///
/// arboard's handle is not Send/Sync on every platform, so a fresh one is
/// opened per copy. On Linux the handle itself serves the selection, so the
/// copy blocks until another client takes the contents over.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        set_contents(&mut clipboard, text).map_err(|e| Error::Clipboard(e.to_string()))
    }
}

#[cfg(target_os = "linux")]
fn set_contents(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_contents(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "needs a desktop clipboard"]
    fn test_contents_served_until_replaced() {
        let copier = std::thread::spawn(|| SystemClipboard.set_text("# Launch Plan"));

        let mut reader = arboard::Clipboard::new().unwrap();
        let mut seen = String::new();
        for _ in 0..50 {
            seen = reader.get_text().unwrap_or_default();
            if seen == "# Launch Plan" {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert_eq!(seen, "# Launch Plan");

        reader.set_text("replaced").unwrap();
        assert!(copier.join().unwrap().is_ok());
    }
}
