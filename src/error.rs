use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RegistroResult<T> = Result<T, RegistroError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RegistroError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    //the fixed message the API promises for any not-found id
    #[snafu(display("El estudiante no existe"))]
    MissingEstudiante { id: i64 },
    //a non-numeric id segment counts as not-found, not as its own bad-request class
    #[snafu(display("El estudiante no existe"))]
    InvalidId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Cuerpo de la solicitud no válido: {}", source))]
    InvalidBody { source: JsonRejection },
}

impl IntoResponse for RegistroError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MakeQuery { .. } | Self::MigrateError { .. } => ISE,
            Self::BadEnvVar { .. } => ISE,
            Self::MissingEstudiante { .. } | Self::InvalidId { .. } => NF,
            Self::InvalidBody { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Json(json!({ "mensaje": self.to_string() }))).into_response()
    }
}
