use leptos::prelude::*;

use crate::data::availability::RoomId;
use crate::data::checker::AvailabilityChecker;
use crate::data::client::GlooAvailabilityClient;
use crate::pages::date_range::{DateFieldsState, DateRangeFields};
use crate::pages::notifications::NotificationCenter;
use crate::settings::WidgetPaths;
use crate::utils::date::today;
use crate::utils::notify::{Notifier, Severity};

#[component]
pub fn CheckAvailability(room_id: RoomId, csrf_token: String, paths: WidgetPaths) -> impl IntoView {
    let center = expect_context::<NotificationCenter>();

    let (modal_open, set_modal_open) = create_signal(false);
    let fields = RwSignal::new(DateFieldsState::open());

    let open_modal = move |_| {
        fields.set(DateFieldsState::open());
        set_modal_open.set(true);
    };

    let handle_confirm = move |_| {
        let range = match fields.with_untracked(|state| state.to_range(today())) {
            Ok(range) => range,
            Err(err) => {
                center.notify(&err.to_string(), Severity::Warning);
                return;
            }
        };

        set_modal_open.set(false);

        let checker = AvailabilityChecker::new(
            room_id.clone(),
            csrf_token.clone(),
            paths.booking_path.clone(),
            GlooAvailabilityClient::new(paths.availability_path.clone()),
            center,
        );

        leptos::task::spawn_local(async move {
            let outcome = checker.check(&range).await;
            leptos::logging::log!("Availability check finished: {:?}", outcome);
        });
    };

    view! {
        <button
            id="check-availability-button"
            class="px-4 py-2 bg-green-600 text-white rounded-md hover:bg-green-700 focus:outline-none focus:ring-2 focus:ring-green-500 focus:ring-offset-2 transition-colors"
            on:click=open_modal
        >
            "Check Availability"
        </button>

        <div class=move || {
            if modal_open.get() {
                "fixed inset-0 z-30 flex items-center justify-center bg-black bg-opacity-40"
            } else {
                "hidden"
            }
        }>
            <div class="w-full max-w-md rounded-lg bg-white p-6 shadow-xl">
                <h2 class="mb-4 text-xl font-semibold text-gray-800">"Choose your dates"</h2>
                <form
                    id="check-availability-form"
                    novalidate
                    on:submit=move |ev| ev.prevent_default()
                >
                    {move || modal_open.get().then(|| view! { <DateRangeFields state=fields/> })}
                </form>
                <div class="mt-4 flex justify-end gap-2">
                    <button
                        class="px-4 py-2 bg-gray-200 text-gray-800 rounded-md hover:bg-gray-300"
                        on:click=move |_| set_modal_open.set(false)
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                        on:click=handle_confirm
                    >
                        "Check"
                    </button>
                </div>
            </div>
        </div>
    }
}
