use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Maximum number of entries kept in the rolling status log.
pub const STATUS_LOG_LIMIT: usize = 200;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Default status shown before the first upload.
    pub fn idle() -> Self {
        Self {
            text: "Upload a dataset to get started".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
            log: Vec::new(),
        }
    }

    /// Replace the message and badge, recording the message in the log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.text = text.into();
        self.badge_label = tone.label().into();
        self.badge_color = style::status_badge_color(tone);
        self.log.push(self.text.clone());
        if self.log.len() > STATUS_LOG_LIMIT {
            let excess = self.log.len() - STATUS_LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        if self.log.is_empty() {
            return String::new();
        }
        self.log.join("\n")
    }
}

/// Result of the most recent service probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealthState {
    #[default]
    Unknown,
    Checking,
    Online(Option<String>),
    Unreachable(String),
}

impl ServiceHealthState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Service not checked",
            Self::Checking => "Checking service…",
            Self::Online(_) => "Service online",
            Self::Unreachable(_) => "Service unreachable",
        }
    }

    /// Hover text with the service message or failure reason.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Online(message) => message.as_deref(),
            Self::Unreachable(reason) => Some(reason),
            Self::Unknown | Self::Checking => None,
        }
    }
}
