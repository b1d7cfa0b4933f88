use crate::error::RegistroResult;
use sqlx::SqliteConnection;

pub mod estudiante;

pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<Option<Self>>;
    async fn get_all(conn: &mut SqliteConnection) -> RegistroResult<Vec<Self>>;
    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<Self>;
    async fn update_in_database(
        id: Self::Id,
        replacement: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<Option<Self>>;
    async fn remove_from_database(id: Self::Id, conn: &mut SqliteConnection)
    -> RegistroResult<bool>;
}
