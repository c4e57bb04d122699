//! User-facing progress output.

/// Line-oriented sink for progress output.
///
/// The update run writes its narration through this trait, so callers
/// decide where the text goes: stdout for the CLI, a buffer in tests.
pub trait ProgressSink {
    /// Write one line of output.
    fn line(&mut self, text: &str);
}

/// Sink that prints each line to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

const BANNER_WIDTH: usize = 76;
const BANNER_TITLE: &str = "NO-IP-PUBLIC-IP-UPDATE";

/// Title line, `=`-padded and centered to the banner width.
pub fn opening_banner() -> String {
    let pad = BANNER_WIDTH.saturating_sub(BANNER_TITLE.len());
    let left = pad / 2;
    format!(
        "{}{}{}",
        "=".repeat(left),
        BANNER_TITLE,
        "=".repeat(pad - left)
    )
}

/// Closing rule matching the banner width.
pub fn closing_banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_banner_shape() {
        let banner = opening_banner();
        assert_eq!(banner.len(), BANNER_WIDTH);
        assert!(banner.contains(BANNER_TITLE));
        assert!(banner.starts_with('='));
        assert!(banner.ends_with('='));
    }

    #[test]
    fn test_closing_banner_shape() {
        let banner = closing_banner();
        assert_eq!(banner.len(), BANNER_WIDTH);
        assert!(banner.chars().all(|c| c == '='));
    }
}
