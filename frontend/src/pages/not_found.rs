use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {}

#[function_component(NotFound)]
pub fn not_found(_props: &NotFoundProps) -> Html {
    html! {
        <div class="not-found-page max-w-4xl mx-auto py-12 px-4 space-y-4">
            <h1 class="text-2xl font-bold">{"404 - Page Not Found"}</h1>
            <p>{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("text-blue-600", "hover:underline")}>
                {"Go to the contest list"}
            </Link<Route>>
        </div>
    }
}
