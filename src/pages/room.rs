use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::rooms::RoomCatalog;
use crate::pages::check_availability::CheckAvailability;
use crate::settings::WidgetPaths;

pub const CSRF_META_NAME: &str = "csrf-token";
pub const AVAILABILITY_PATH_META_NAME: &str = "availability-path";
pub const BOOKING_PATH_META_NAME: &str = "booking-path";

/// Anti-forgery token for this page. The server knows it directly; in the
/// browser it is read back from the `<meta>` tag the shell rendered.
pub fn page_csrf_token() -> String {
    #[cfg(feature = "ssr")]
    {
        crate::server::csrf_token().to_string()
    }

    #[cfg(not(feature = "ssr"))]
    {
        read_meta_content(CSRF_META_NAME).unwrap_or_default()
    }
}

/// Endpoint and booking paths, delivered to the browser the same way as the token.
pub fn page_widget_paths() -> WidgetPaths {
    #[cfg(feature = "ssr")]
    {
        WidgetPaths::from(crate::server::settings())
    }

    #[cfg(not(feature = "ssr"))]
    {
        let defaults = WidgetPaths::default();
        WidgetPaths {
            availability_path: read_meta_content(AVAILABILITY_PATH_META_NAME)
                .unwrap_or(defaults.availability_path),
            booking_path: read_meta_content(BOOKING_PATH_META_NAME)
                .unwrap_or(defaults.booking_path),
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn read_meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(&format!("meta[name='{}']", name))
        .ok()??
        .get_attribute("content")
}

#[component]
pub fn RoomPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = RoomCatalog::default();
    let csrf_token = page_csrf_token();
    let paths = page_widget_paths();

    view! {
        <div class="max-w-4xl mx-auto p-4">
            {move || {
                let id = params.read().get("id").unwrap_or_default();
                match catalog.find(&id).cloned() {
                    Some(room) => view! {
                        <div>
                            <h2 class="text-2xl font-bold text-gray-800 mb-2">{room.name.clone()}</h2>
                            <p class="text-gray-600 mb-6">{room.description.clone()}</p>
                            <CheckAvailability
                                room_id=room.room_id()
                                csrf_token=csrf_token.clone()
                                paths=paths.clone()
                            />
                        </div>
                    }.into_any(),
                    None => view! {
                        <p class="text-gray-500">"Room not found."</p>
                    }.into_any(),
                }
            }}
            <a href="/" class="mt-6 inline-block text-sm text-blue-600 hover:underline">"Back to all rooms"</a>
        </div>
    }
}
