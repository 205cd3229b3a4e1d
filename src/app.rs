use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{FlatRoutes, Route, Router},
    ParamSegment, StaticSegment,
};

use crate::pages::home::HomePage;
use crate::pages::notifications::{NotificationCenter, Notifications};
use crate::pages::room::{
    page_csrf_token, page_widget_paths, RoomPage, AVAILABILITY_PATH_META_NAME,
    BOOKING_PATH_META_NAME, CSRF_META_NAME,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let paths = page_widget_paths();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CSRF_META_NAME content=page_csrf_token()/>
                <meta name=AVAILABILITY_PATH_META_NAME content=paths.availability_path/>
                <meta name=BOOKING_PATH_META_NAME content=paths.booking_path/>
                <Stylesheet id="leptos" href="/pkg/room-availability-leptos.css"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <Link rel="preconnect" href="https://fonts.googleapis.com"/>
                <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
                <Link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet"/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(NotificationCenter::new());

    view! {
        <Title text="Room Availability"/>
        <Router>
            <FlatRoutes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("rooms"), ParamSegment("id")) view=RoomPage/>
            </FlatRoutes>
        </Router>
        <Notifications/>
    }
}
