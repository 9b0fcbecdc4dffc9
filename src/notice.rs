//! User-facing notifications exchanged with the presentation shell.

use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    /// Nothing was done, but nothing went wrong either.
    Info,
    Error,
}

impl NoticeLevel {
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Info => "Info",
            Self::Error => "Error",
        }
    }
}

/// A modal notification acknowledged with a single button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            title: level.title().to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    /// Override the title.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }

    pub fn is_info(&self) -> bool {
        self.level == NoticeLevel::Info
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.message)
    }
}

/// A question with an accept and a reject option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub accept: String,
    pub reject: String,
}

impl Confirmation {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            accept: "Yes".to_string(),
            reject: "No".to_string(),
        }
    }

    /// Interpret a typed answer. Matches either option label or its first
    /// letter, ignoring case; anything else is `None`.
    pub fn answer(&self, input: &str) -> Option<bool> {
        let input = input.trim();
        let matches = |label: &str| {
            input.eq_ignore_ascii_case(label)
                || (input.len() == 1
                    && label
                        .get(..1)
                        .is_some_and(|first| input.eq_ignore_ascii_case(first)))
        };
        if matches(&self.accept) {
            Some(true)
        } else if matches(&self.reject) {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_levels() {
        let n = Notice::info("No results to save.");
        assert!(n.is_info());
        assert_eq!(n.title, "Info");
        assert_eq!(n.to_string(), "[Info] No results to save.");
        assert!(Notice::error("x").is_error());
        assert!(Notice::success("x").is_success());
    }

    #[test]
    fn test_notice_titled() {
        let n = Notice::info("body").titled("Scientist Details");
        assert_eq!(n.title, "Scientist Details");
        assert_eq!(n.level, NoticeLevel::Info);
    }

    #[test]
    fn test_confirmation_answers() {
        let c = Confirmation::new("Exit", "Sure?");
        assert_eq!(c.answer("yes"), Some(true));
        assert_eq!(c.answer(" Y "), Some(true));
        assert_eq!(c.answer("No"), Some(false));
        assert_eq!(c.answer("n"), Some(false));
        assert_eq!(c.answer("maybe"), None);
        assert_eq!(c.answer(""), None);
    }
}
