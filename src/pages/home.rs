use leptos::prelude::*;

use crate::data::rooms::RoomCatalog;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = RoomCatalog::default();

    view! {
        <div class="max-w-4xl mx-auto p-4">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">Our Rooms</h2>
            <ul class="divide-y divide-gray-200 bg-white border border-gray-200 rounded-lg">
                {catalog.get_all().iter().map(|room| {
                    view! {
                        <li class="p-4 hover:bg-gray-50">
                            <a href=room.href() class="text-lg font-medium text-blue-600 hover:underline">
                                {room.name.clone()}
                            </a>
                            <p class="text-sm text-gray-500">{room.description.clone()}</p>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
