use crate::favorites::FavoritesContext;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let favorites = use_context::<FavoritesContext>().expect("Favorites context not found");
    let favorite_count = favorites.state.ids().len();

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <Link<Route> to={Route::Dashboard} classes={classes!("flex", "items-baseline", "space-x-2")}>
                        <span class={classes!("text-lg", "sm:text-xl", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>{"CF"}</span>
                        <span class={classes!("text-lg", "font-semibold")}>{"Contest Dashboard"}</span>
                    </Link<Route>>
                    <span class={classes!("text-sm", "text-blue-100")}>
                        {format!("★ {} favorite{}", favorite_count, if favorite_count == 1 { "" } else { "s" })}
                    </span>
                </div>
            </div>
        </nav>
    }
}
