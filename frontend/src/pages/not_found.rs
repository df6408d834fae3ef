use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page min-h-screen flex flex-col items-center justify-center">
            <h1 class="text-3xl font-bold mb-2">{"404 - Page Not Found"}</h1>
            <p class="mb-4 text-gray-600">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Settings} classes="text-blue-600 hover:underline">
                {"Back to settings"}
            </Link<Route>>
        </div>
    }
}
