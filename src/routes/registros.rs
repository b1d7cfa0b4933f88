use crate::{
    data::{
        DataType,
        estudiante::{Estudiante, EstudianteForm},
    },
    error::{InvalidBodySnafu, InvalidIdSnafu, MissingEstudianteSnafu, RegistroResult},
    state::RegistroState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use snafu::{OptionExt, ResultExt, ensure};

fn parse_id(original: &str) -> RegistroResult<i64> {
    original.parse().context(InvalidIdSnafu { original })
}

pub async fn get_registros(State(state): State<RegistroState>) -> RegistroResult<Json<Vec<Estudiante>>> {
    let todos = Estudiante::get_all(&mut *state.get_connection().await?).await?;
    Ok(Json(todos))
}

#[axum::debug_handler]
pub async fn post_new_registro(
    State(state): State<RegistroState>,
    body: Result<Json<EstudianteForm>, JsonRejection>,
) -> RegistroResult<Json<Estudiante>> {
    let Json(form) = body.context(InvalidBodySnafu)?;

    let creado = Estudiante::insert_into_database(form, &mut *state.get_connection().await?).await?;
    Ok(Json(creado))
}

pub async fn get_registro(
    State(state): State<RegistroState>,
    Path(id): Path<String>,
) -> RegistroResult<Json<Estudiante>> {
    let id = parse_id(&id)?;

    let estudiante = Estudiante::get_from_db_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingEstudianteSnafu { id })?;
    Ok(Json(estudiante))
}

pub async fn put_registro(
    State(state): State<RegistroState>,
    Path(id): Path<String>,
    body: Result<Json<EstudianteForm>, JsonRejection>,
) -> RegistroResult<Json<Estudiante>> {
    let id = parse_id(&id)?;
    let Json(form) = body.context(InvalidBodySnafu)?;

    let actualizado = Estudiante::update_in_database(id, form, &mut *state.get_connection().await?)
        .await?
        .context(MissingEstudianteSnafu { id })?;
    Ok(Json(actualizado))
}

pub async fn delete_registro(
    State(state): State<RegistroState>,
    Path(id): Path<String>,
) -> RegistroResult<Json<Value>> {
    let id = parse_id(&id)?;

    let eliminado =
        Estudiante::remove_from_database(id, &mut *state.get_connection().await?).await?;
    ensure!(eliminado, MissingEstudianteSnafu { id });

    Ok(Json(json!({ "mensaje": "Estudiante eliminado correctamente" })))
}
