use crate::{maud_conveniences::title, state::RegistroState};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RegistroState>) -> Markup {
    state.render(html! {
        div class="w-full sm:w-2/3 p-5" {
            div class="flex justify-between py-4" {
                (title("Lista de Estudiantes"))
                button popovertarget="modal" hx-get="/internal/registros/form" hx-target="#modal" class="bg-blue-500 hover:bg-blue-600 rounded p-2 text-white" {
                    "Agregar Estudiante"
                }
            }
            div id="tabla" hx-get="/internal/get_registros" hx-trigger="load" {}
            //light-dismiss overlay, refilled with a fresh form fragment on every open
            div id="modal" popover class="w-full sm:w-1/3 p-5 bg-white rounded-md" {}
        }
    })
}
