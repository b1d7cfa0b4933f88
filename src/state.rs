use crate::{
    config::RuntimeConfiguration,
    error::{GetDatabaseConnectionSnafu, MigrateSnafu, OpenDatabaseSnafu, RegistroResult},
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, pool::PoolConnection, sqlite::SqlitePoolOptions};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct RegistroState {
    pool: Pool<Sqlite>,
}

impl RegistroState {
    pub async fn new(
        options: SqlitePoolOptions,
        config: &RuntimeConfiguration,
    ) -> RegistroResult<Self> {
        let pool = options
            .connect_with(config.db_config().connect_options())
            .await
            .context(OpenDatabaseSnafu)?;

        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: Pool<Sqlite>) -> RegistroResult<Self> {
        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Registro de Estudiantes" }
                }
                body class="bg-gray-100 min-h-screen flex flex-col sm:flex-row justify-center text-black" "hx-on::response-error"="alert('Hubo un error al realizar la solicitud.')" {
                    (markup)
                }
            }
        }
    }

    pub async fn get_connection(&self) -> RegistroResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub async fn sensible_shutdown(&self) {
        self.pool.close().await;
    }
}

impl Deref for RegistroState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
