use crate::{
    data::{
        DataType,
        estudiante::{self, CARRERAS, Estudiante, EstudianteForm, GENEROS, OrdenarPor},
    },
    error::{MissingEstudianteSnafu, RegistroResult},
    state::RegistroState,
};
use axum::{
    Form,
    extract::{Path, Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;
use snafu::{OptionExt, ensure};

use crate::maud_conveniences::{render_table, select_form_element, simple_form_element, title};

#[derive(Deserialize, Default)]
pub struct TablaQuery {
    #[serde(default)]
    buscar: String,
    #[serde(default)]
    ordenar: OrdenarPor,
}

pub async fn internal_get_registros(
    State(state): State<RegistroState>,
    Query(TablaQuery { buscar, ordenar }): Query<TablaQuery>,
) -> RegistroResult<Markup> {
    let todos = Estudiante::get_all(&mut *state.get_connection().await?).await?;
    //filter and sort are re-derived on every render, never persisted
    let visibles = estudiante::ordenar(estudiante::filtrar(todos, &buscar), ordenar);

    Ok(render_tabla(&buscar, ordenar, visibles))
}

fn render_tabla(buscar: &str, ordenar: OrdenarPor, visibles: Vec<Estudiante>) -> Markup {
    let filas = visibles
        .into_iter()
        .map(|estudiante| {
            let id = estudiante.id;
            [
                html! {(id)},
                html! {(estudiante.nombre)},
                html! {(estudiante.genero)},
                html! {(estudiante.edad)},
                html! {(estudiante.carrera)},
                html! {
                    button popovertarget={"menu-" (id)} class="w-6 h-6 p-1 flex items-center justify-center cursor-pointer" {"···"}
                    div id={"menu-" (id)} popover class="w-24 bg-white border border-gray-300 flex flex-col" {
                        //opening the modal popover auto-closes this menu
                        button popovertarget="modal" hx-get={"/internal/registros/form?id=" (id)} hx-target="#modal" class="text-blue-500 hover:text-blue-700 cursor-pointer p-2 text-center bg-gray-100 hover:bg-blue-200" {
                            "Editar"
                        }
                        button popovertarget={"menu-" (id)} popovertargetaction="hide" hx-delete={"/internal/registros/" (id)} hx-target="#tabla" class="text-red-500 hover:text-red-700 cursor-pointer p-2 text-center bg-gray-100 hover:bg-red-200" {
                            "Eliminar"
                        }
                    }
                },
            ]
        })
        .collect();

    html! {
        div class="rounded-lg shadow-lg bg-white p-4" {
            form class="mb-4 flex justify-between" {
                input type="search" id="buscar" name="buscar" value=(buscar) placeholder="Buscar estudiante" hx-get="/internal/get_registros" hx-trigger="input changed delay:300ms" hx-include="closest form" hx-target="#tabla" class="p-2 border border-gray-300 text-black rounded-md" {}
                select id="ordenar" name="ordenar" hx-get="/internal/get_registros" hx-trigger="change" hx-include="closest form" hx-target="#tabla" class="p-3 border border-gray-300 text-black ml-2 rounded-md" {
                    option value="id" selected[ordenar == OrdenarPor::Id] {"Sort By: ID"}
                    option value="nombre" selected[ordenar == OrdenarPor::Nombre] {"Sort By: Nombre"}
                    option value="genero" selected[ordenar == OrdenarPor::Genero] {"Sort By: Género"}
                    option value="edad" selected[ordenar == OrdenarPor::Edad] {"Sort By: Edad"}
                    option value="carrera" selected[ordenar == OrdenarPor::Carrera] {"Sort By: Carrera"}
                }
            }
            (render_table(
                ["ID", "Nombre", "Género", "Edad", "Carrera", "Acciones"],
                filas,
                "No hay ningun registro",
            ))
        }
    }
}

#[derive(Deserialize, Default)]
pub struct FormQuery {
    id: Option<i64>,
}

pub async fn internal_get_registro_form(
    State(state): State<RegistroState>,
    Query(FormQuery { id }): Query<FormQuery>,
) -> RegistroResult<Markup> {
    let editando = match id {
        Some(id) => Some(
            Estudiante::get_from_db_by_id(id, &mut *state.get_connection().await?)
                .await?
                .context(MissingEstudianteSnafu { id })?,
        ),
        None => None,
    };

    Ok(render_formulario(editando.as_ref()))
}

fn render_formulario(editando: Option<&Estudiante>) -> Markup {
    let edad = editando.map(|e| e.edad.to_string());

    html! {
        @if editando.is_some() {
            (title("Actualizar estudiante"))
        } @else {
            (title("Agregar estudiante"))
        }
        form hx-post=[editando.is_none().then_some("/internal/registros")] hx-target="#tabla" "hx-on::after-request"="if(event.detail.successful) this.closest('[popover]').hidePopover()" class="rounded-lg shadow-lg bg-white p-4" {
            (simple_form_element("nombre", "Nombre", None, editando.map(|e| e.nombre.as_str())))
            (select_form_element("genero", "Género", "Selecciona tu género", &GENEROS, editando.map(|e| e.genero.as_str())))
            (simple_form_element("edad", "Edad", Some("number"), edad.as_deref()))
            (select_form_element("carrera", "Carrera", "Selecciona tu carrera", &CARRERAS, editando.map(|e| e.carrera.as_str())))

            @if let Some(estudiante) = editando {
                div class="text-center" {
                    //deliberately not a form submit, the update path is its own request
                    button type="button" hx-put={"/internal/registros/" (estudiante.id)} hx-include="closest form" hx-target="#tabla" class="bg-green-500 hover:bg-green-600 p-2 rounded shadow-md text-white" {
                        "Actualizar"
                    }
                    button type="button" popovertarget="modal" popovertargetaction="hide" class="bg-red-500 hover:bg-red-600 p-2 rounded shadow-md ml-2 text-white" {
                        "Cancelar"
                    }
                }
            } @else {
                div class="text-center" {
                    button type="submit" class="bg-blue-500 hover:bg-blue-600 p-2 rounded shadow-md text-white" {
                        "Enviar"
                    }
                    button type="button" popovertarget="modal" popovertargetaction="hide" class="bg-red-500 hover:bg-red-600 p-2 rounded shadow-md ml-2 text-white" {
                        "Cancelar"
                    }
                }
            }
        }
    }
}

pub async fn internal_post_new_registro(
    State(state): State<RegistroState>,
    Form(form): Form<EstudianteForm>,
) -> RegistroResult<Markup> {
    Estudiante::insert_into_database(form, &mut *state.get_connection().await?).await?;

    internal_get_registros(State(state), Query(TablaQuery::default())).await
}

pub async fn internal_put_registro(
    State(state): State<RegistroState>,
    Path(id): Path<i64>,
    Form(form): Form<EstudianteForm>,
) -> RegistroResult<Markup> {
    Estudiante::update_in_database(id, form, &mut *state.get_connection().await?)
        .await?
        .context(MissingEstudianteSnafu { id })?;

    internal_get_registros(State(state), Query(TablaQuery::default())).await
}

pub async fn internal_delete_registro(
    State(state): State<RegistroState>,
    Path(id): Path<i64>,
) -> RegistroResult<Markup> {
    let eliminado =
        Estudiante::remove_from_database(id, &mut *state.get_connection().await?).await?;
    ensure!(eliminado, MissingEstudianteSnafu { id });

    internal_get_registros(State(state), Query(TablaQuery::default())).await
}
