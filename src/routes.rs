use crate::state::RegistroState;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

pub mod index;
pub mod registros;
pub mod tabla;

pub fn router(state: RegistroState) -> Router {
    Router::new()
        .route("/", get(index::get_index_route))
        .route(
            "/registros",
            get(registros::get_registros).post(registros::post_new_registro),
        )
        .route(
            "/registros/{id}",
            get(registros::get_registro)
                .put(registros::put_registro)
                .delete(registros::delete_registro),
        )
        .route("/internal/get_registros", get(tabla::internal_get_registros))
        .route(
            "/internal/registros/form",
            get(tabla::internal_get_registro_form),
        )
        .route("/internal/registros", post(tabla::internal_post_new_registro))
        .route(
            "/internal/registros/{id}",
            put(tabla::internal_put_registro).delete(tabla::internal_delete_registro),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
