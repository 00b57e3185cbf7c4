//! Route tables: pure binding of method + path to the middleware chain.
//! Ordering is fixed as auth gate -> validator -> controller; an
//! unauthenticated write is rejected before any validation cost is paid.

use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{auth, characters, inventory, players, quests, system};
use crate::middleware::{
    require_session, validate_character, validate_item, validate_player, validate_quest,
};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let gate = from_fn_with_state(state.clone(), require_session);

    let api = Router::new()
        .nest("/player", player_routes())
        .nest("/character", character_routes())
        .nest("/quest", quest_routes())
        .nest("/inventory", inventory_routes())
        .route_layer(gate.clone());

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route(
            "/auth/session",
            post(auth::session_create).delete(auth::session_logout.layer(gate.clone())),
        )
        .route("/auth/whoami", get(auth::session_whoami.layer(gate)))
        .merge(api)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn player_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(players::get_all_players)
                .post(players::create_player.layer(from_fn(validate_player))),
        )
        .route(
            "/:id",
            get(players::get_player_by_id)
                .put(players::update_player.layer(from_fn(validate_player)))
                .delete(players::delete_player),
        )
}

fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(characters::get_all_characters)
                .post(characters::create_character.layer(from_fn(validate_character))),
        )
        .route(
            "/:id",
            get(characters::get_character_by_id)
                .put(characters::update_character.layer(from_fn(validate_character)))
                .delete(characters::delete_character),
        )
        .route("/user/:id", get(characters::get_characters_by_user))
}

fn quest_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(quests::get_all_quests).post(quests::create_quest.layer(from_fn(validate_quest))),
        )
        .route(
            "/:id",
            get(quests::get_quest_by_id)
                .put(quests::update_quest.layer(from_fn(validate_quest)))
                .delete(quests::delete_quest),
        )
        .route("/difficulty/:difficulty", get(quests::get_quests_by_difficulty))
        .route("/type/:quest_type", get(quests::get_quests_by_type))
        .route("/available/:level", get(quests::get_available_quests_for_level))
}

fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(inventory::get_all_items)
                .post(inventory::create_item.layer(from_fn(validate_item))),
        )
        .route(
            "/:id",
            get(inventory::get_item_by_id)
                .put(inventory::update_item.layer(from_fn(validate_item)))
                .delete(inventory::delete_item),
        )
        .route(
            "/character/:characterId",
            get(inventory::get_items_by_character),
        )
}
