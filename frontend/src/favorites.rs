use crate::storage::LocalStorageBackend;
use log::debug;
use shared::{FavoriteIds, FavoritesStore};
use std::rc::Rc;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FavoritesState {
    store: FavoritesStore<LocalStorageBackend>,
}

impl FavoritesState {
    pub fn load(key: &str) -> Self {
        Self {
            store: FavoritesStore::load(LocalStorageBackend, key),
        }
    }

    pub fn ids(&self) -> &FavoriteIds {
        self.store.ids()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.store.is_favorite(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FavoritesAction {
    Toggle(String),
}

impl Reducible for FavoritesState {
    type Action = FavoritesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FavoritesAction::Toggle(id) => {
                let mut next = (*self).clone();
                next.store.toggle(&id);
                Rc::new(next)
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct FavoritesProviderProps {
    pub storage_key: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FavoritesContext {
    pub state: FavoritesState,
    pub toggle: Callback<String>,
}

impl FavoritesContext {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.is_favorite(id)
    }
}

/// Loads the favorites record once and serializes every toggle through a
/// reducer, so all mutation happens on the UI thread.
#[function_component(FavoritesProvider)]
pub fn favorites_provider(props: &FavoritesProviderProps) -> Html {
    let storage_key = props.storage_key.clone();
    let favorites = use_reducer_eq(move || FavoritesState::load(&storage_key));

    let toggle = {
        let favorites = favorites.clone();
        Callback::from(move |id: String| {
            debug!("Toggling favorite {}", id);
            favorites.dispatch(FavoritesAction::Toggle(id));
        })
    };

    let context = FavoritesContext {
        state: (*favorites).clone(),
        toggle,
    };

    html! {
        <ContextProvider<FavoritesContext> context={context}>
            {props.children.clone()}
        </ContextProvider<FavoritesContext>>
    }
}
