use leptos::prelude::*;

use crate::utils::notify::{ModalNotice, Notifier, Severity};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Reactive notification state shared through context. Toasts stack, only one
/// dialog is shown at a time and a newer one replaces it.
#[derive(Debug, Clone, Copy)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Toast>>,
    modal: RwSignal<Option<ModalNotice>>,
    next_id: RwSignal<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            modal: RwSignal::new(None),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn modal(&self) -> ReadSignal<Option<ModalNotice>> {
        self.modal.read_only()
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, severity: Severity) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                severity,
            })
        });

        #[cfg(feature = "hydrate")]
        {
            let center = *self;
            set_timeout(move || center.dismiss(id), TOAST_LIFETIME);
        }
    }

    fn notify_modal(&self, notice: ModalNotice) {
        self.modal.set(Some(notice));
    }
}

fn icon_symbol(icon: Severity) -> &'static str {
    match icon {
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Error => "✕",
        Severity::Info => "i",
    }
}

#[component]
pub fn Notifications() -> impl IntoView {
    let center = expect_context::<NotificationCenter>();

    view! {
        <div class="fixed top-4 inset-x-0 z-50 flex flex-col items-center gap-2 pointer-events-none">
            <For
                each=move || center.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("pointer-events-auto px-4 py-2 rounded-md text-white shadow-md cursor-pointer {}", toast.severity.css_class())
                            on:click=move |_| center.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>

        {move || center.modal().get().map(|notice| view! { <NoticeDialog notice=notice center=center/> })}
    }
}

#[component]
fn NoticeDialog(notice: ModalNotice, center: NotificationCenter) -> impl IntoView {
    let ModalNotice { title, text, icon, confirm_label, link } = notice;

    view! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-40">
            <div class="relative w-full max-w-md rounded-lg bg-white p-6 shadow-xl text-center">
                <button
                    class="absolute top-2 right-3 text-gray-400 hover:text-gray-600"
                    aria-label="Close"
                    on:click=move |_| center.close_modal()
                >
                    "×"
                </button>
                <div class=format!("mx-auto mb-3 flex h-12 w-12 items-center justify-center rounded-full text-xl text-white {}", icon.css_class())>
                    {icon_symbol(icon)}
                </div>
                <h2 class="text-xl font-semibold text-gray-800">{title}</h2>
                {(!text.is_empty()).then(|| view! { <p class="mt-2 text-gray-600">{text}</p> })}
                {link.map(|link| view! {
                    <p class="mt-4">
                        <a href=link.href class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                            {link.label}
                        </a>
                    </p>
                })}
                {confirm_label.map(|label| view! {
                    <button
                        class="mt-4 px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                        on:click=move |_| center.close_modal()
                    >
                        {label}
                    </button>
                })}
            </div>
        </div>
    }
}
