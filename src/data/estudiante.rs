use crate::{
    data::DataType,
    error::{MakeQuerySnafu, RegistroResult},
};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use sqlx::SqliteConnection;

pub const GENEROS: [&str; 3] = ["Masculino", "Femenino", "Otro"];

pub const CARRERAS: [&str; 8] = [
    "Ing. en Innovación Agrícola Sustentable",
    "Ing. Electromecánica",
    "Ing. Electrónica",
    "Ing. en Gestión Empresarial",
    "Ing. Industrial",
    "Ing.Mecatrónica",
    "Ing. en Sistemas Computacionales",
    "Lic. en Administración",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Estudiante {
    pub id: i64,
    pub nombre: String,
    pub genero: String,
    pub edad: i64,
    pub carrera: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EstudianteForm {
    pub nombre: String,
    pub genero: String,
    pub edad: i64,
    pub carrera: String,
}

impl DataType for Estudiante {
    type Id = i64;
    type FormForAdding = EstudianteForm;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<Option<Self>> {
        sqlx::query_as("SELECT id, nombre, genero, edad, carrera FROM estudiante WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_all(conn: &mut SqliteConnection) -> RegistroResult<Vec<Self>> {
        sqlx::query_as("SELECT id, nombre, genero, edad, carrera FROM estudiante")
            .fetch_all(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<Self> {
        sqlx::query_as("INSERT INTO estudiante (nombre, genero, edad, carrera) VALUES (?, ?, ?, ?) RETURNING id, nombre, genero, edad, carrera")
            .bind(to_be_added.nombre)
            .bind(to_be_added.genero)
            .bind(to_be_added.edad)
            .bind(to_be_added.carrera)
            .fetch_one(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn update_in_database(
        id: Self::Id,
        replacement: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<Option<Self>> {
        //all four fields are replaced together, there are no partial updates
        sqlx::query_as("UPDATE estudiante SET nombre = ?, genero = ?, edad = ?, carrera = ? WHERE id = ? RETURNING id, nombre, genero, edad, carrera")
            .bind(replacement.nombre)
            .bind(replacement.genero)
            .bind(replacement.edad)
            .bind(replacement.carrera)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn remove_from_database(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RegistroResult<bool> {
        let result = sqlx::query("DELETE FROM estudiante WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdenarPor {
    #[default]
    Id,
    Nombre,
    Genero,
    Edad,
    Carrera,
}

pub fn filtrar(estudiantes: Vec<Estudiante>, buscar: &str) -> Vec<Estudiante> {
    let buscar = buscar.to_lowercase();
    estudiantes
        .into_iter()
        .filter(|estudiante| estudiante.nombre.to_lowercase().contains(&buscar))
        .collect()
}

pub fn ordenar(mut estudiantes: Vec<Estudiante>, por: OrdenarPor) -> Vec<Estudiante> {
    //ascending by the natural value of the chosen field, ties unordered
    match por {
        OrdenarPor::Id => estudiantes.sort_unstable_by_key(|e| e.id),
        OrdenarPor::Nombre => estudiantes.sort_unstable_by(|a, b| a.nombre.cmp(&b.nombre)),
        OrdenarPor::Genero => estudiantes.sort_unstable_by(|a, b| a.genero.cmp(&b.genero)),
        OrdenarPor::Edad => estudiantes.sort_unstable_by_key(|e| e.edad),
        OrdenarPor::Carrera => estudiantes.sort_unstable_by(|a, b| a.carrera.cmp(&b.carrera)),
    }
    estudiantes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estudiante(id: i64, nombre: &str, edad: i64) -> Estudiante {
        Estudiante {
            id,
            nombre: nombre.to_owned(),
            genero: GENEROS[0].to_owned(),
            edad,
            carrera: CARRERAS[4].to_owned(),
        }
    }

    #[test]
    fn filtrar_is_case_insensitive_substring_on_nombre() {
        let todos = vec![
            estudiante(1, "Ana", 20),
            estudiante(2, "Juan", 21),
            estudiante(3, "Anabel", 22),
        ];

        let nombres: Vec<_> = filtrar(todos, "ana")
            .into_iter()
            .map(|e| e.nombre)
            .collect();
        assert_eq!(nombres, ["Ana", "Anabel"]);
    }

    #[test]
    fn filtrar_with_empty_search_keeps_everything() {
        let todos = vec![estudiante(1, "Ana", 20), estudiante(2, "Juan", 21)];
        assert_eq!(filtrar(todos, "").len(), 2);
    }

    #[test]
    fn filtrar_with_no_match_is_empty() {
        let todos = vec![estudiante(1, "Ana", 20), estudiante(2, "Juan", 21)];
        assert!(filtrar(todos, "zzz").is_empty());
    }

    #[test]
    fn ordenar_by_edad_is_ascending() {
        let todos = vec![
            estudiante(1, "Ana", 30),
            estudiante(2, "Juan", 19),
            estudiante(3, "Luis", 22),
        ];

        let edades: Vec<_> = ordenar(todos, OrdenarPor::Edad)
            .into_iter()
            .map(|e| e.edad)
            .collect();
        assert_eq!(edades, [19, 22, 30]);
    }

    #[test]
    fn ordenar_by_nombre_is_ascending() {
        let todos = vec![
            estudiante(1, "Juan", 21),
            estudiante(2, "Ana", 20),
            estudiante(3, "Luis", 22),
        ];

        let nombres: Vec<_> = ordenar(todos, OrdenarPor::Nombre)
            .into_iter()
            .map(|e| e.nombre)
            .collect();
        assert_eq!(nombres, ["Ana", "Juan", "Luis"]);
    }

    #[test]
    fn ordenar_por_parses_from_query_values() {
        for (texto, esperado) in [
            ("id", OrdenarPor::Id),
            ("nombre", OrdenarPor::Nombre),
            ("genero", OrdenarPor::Genero),
            ("edad", OrdenarPor::Edad),
            ("carrera", OrdenarPor::Carrera),
        ] {
            let parseado: OrdenarPor =
                serde_json::from_value(serde_json::Value::String(texto.to_owned()))
                    .expect("unable to parse sort key");
            assert_eq!(parseado, esperado);
        }
    }
}
