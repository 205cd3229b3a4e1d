#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "bg-green-600",
            Severity::Warning => "bg-amber-500",
            Severity::Error => "bg-red-600",
            Severity::Info => "bg-blue-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeLink {
    pub href: String,
    pub label: String,
}

/// A blocking dialog. Without a confirm label the dialog has no confirm button
/// and is left through its link or the close control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalNotice {
    pub title: String,
    pub text: String,
    pub icon: Severity,
    pub confirm_label: Option<String>,
    pub link: Option<NoticeLink>,
}

impl ModalNotice {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        icon: Severity,
        confirm_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            icon,
            confirm_label: Some(confirm_label.into()),
            link: None,
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);

    fn notify_modal(&self, notice: ModalNotice);
}
