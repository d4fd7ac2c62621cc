//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 에러 타입을 두 종류로 나눕니다.
//!
//! - `StartupError`: 서버 시작 전에 발생하는 에러 (설정, DB 연결, 스키마 생성).
//!   모두 치명적이며, 프로세스는 재시도 없이 종료됩니다.
//! - `AppError`: 요청 하나를 처리하는 동안 발생하는 에러.
//!   해당 요청의 HTTP 응답으로만 보고되고, 다른 요청에는 영향을 주지 않습니다.
//!
//! 실패 응답의 본문은 JSON이 아닌 **일반 텍스트**입니다.
//! 구조화된 JSON은 성공 응답(`{"transacao_id": ...}`)에만 사용합니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 검증 실패 시 클라이언트에게 돌려주는 메시지
pub const INVALID_DATA_MESSAGE: &str =
    "Dados inválidos: 'chave' e 'valor' (positivo) são obrigatórios";

/// 서버 시작 단계의 에러
///
/// `main`에서 `?`로 전파되면 anyhow가 메시지를 출력하고
/// 0이 아닌 종료 코드로 프로세스를 끝냅니다.
#[derive(Debug, Error)]
pub enum StartupError {
    /// 환경변수 값을 해석할 수 없음
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// DB에 연결할 수 없거나 ping이 실패함
    /// #[source]: 원인 에러(sqlx::Error)를 에러 체인에 연결합니다.
    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    /// `CREATE TABLE` 실행 실패
    #[error("Failed to initialize the database schema: {0}")]
    Schema(#[source] sqlx::Error),
}

/// 요청 처리 중 발생하는 에러
///
/// 핸들러가 `Result<T, AppError>`를 반환하면
/// Axum이 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// `/pagamentos`에 POST 이외의 메서드로 요청함 (HTTP 405)
    #[error("Método não permitido")]
    MethodNotAllowed,

    /// 요청 본문이 올바른 JSON이 아님 (HTTP 400)
    /// String에는 serde_json 디코더가 보고한 상세 내용이 들어 있습니다.
    #[error("JSON inválido: {0}")]
    Decode(String),

    /// `chave`가 비어 있거나 `valor`가 0 이하 (HTTP 400)
    #[error("{}", INVALID_DATA_MESSAGE)]
    Validation,

    /// INSERT 실패 (HTTP 500)
    /// #[from]: sqlx 함수 결과에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("Erro ao salvar pagamento: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Decode(_) | AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    /// AppError를 `(상태 코드, 텍스트 본문)` 응답으로 변환합니다.
    ///
    /// `String` 본문은 Axum이 `Content-Type: text/plain; charset=utf-8`로 보냅니다.
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            // DB 에러는 서버 로그에도 남깁니다.
            AppError::Persistence(e) => tracing::error!("Failed to insert payment: {}", e),
            _ => tracing::debug!(%status, "Rejected payment request: {}", self),
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_variant_to_its_status() {
        assert_eq!(AppError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(AppError::Decode("eof".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Persistence(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_carry_the_underlying_detail() {
        assert_eq!(AppError::MethodNotAllowed.to_string(), "Método não permitido");
        assert_eq!(
            AppError::Decode("EOF while parsing".into()).to_string(),
            "JSON inválido: EOF while parsing"
        );
        assert!(AppError::Validation.to_string().starts_with("Dados inválidos"));
        assert!(AppError::Persistence(sqlx::Error::PoolClosed)
            .to_string()
            .starts_with("Erro ao salvar pagamento: "));
    }
}
