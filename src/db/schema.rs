//! # 스키마 초기화
//!
//! 서버가 요청을 받기 전에 한 번 실행됩니다.
//! 1. 연결 풀 생성
//! 2. ping으로 실제 왕복 통신 확인
//! 3. `pagamentos` 테이블이 없으면 생성 (`IF NOT EXISTS`라서 재시작해도 안전)
//!
//! 어느 단계든 실패하면 `StartupError`를 반환하고, 서버는 시작하지 않습니다.

use crate::{config::Config, error::StartupError};
use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
    Connection,
};

/// `pagamentos` 테이블 DDL
pub const CREATE_PAGAMENTOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS pagamentos (
        id SERIAL PRIMARY KEY,
        chave TEXT NOT NULL,
        valor NUMERIC(10, 2) NOT NULL
    )
"#;

/// 스키마 준비가 끝났을 때 남기는 로그 메시지
pub const SCHEMA_READY_MESSAGE: &str = "Conexão com PostgreSQL estabelecida e tabela pronta.";

/// 연결 풀을 만들고 스키마를 준비한 뒤 풀을 반환합니다.
///
/// # 에러
/// - `StartupError::Connection`: 연결 문자열이 잘못됐거나, 연결/ping 실패
/// - `StartupError::Schema`: `CREATE TABLE` 실패
pub async fn init_db(config: &Config) -> Result<PgPool, StartupError> {
    let mut options: PgConnectOptions = config
        .database_url
        .parse()
        .map_err(StartupError::Connection)?;

    // DATABASE_SSL_MODE가 있으면 연결 문자열의 sslmode보다 우선합니다.
    if let Some(mode) = config.ssl_mode {
        options = options.ssl_mode(mode);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(StartupError::Connection)?;

    ping(&pool).await.map_err(StartupError::Connection)?;
    create_schema(&pool).await.map_err(StartupError::Schema)?;

    tracing::info!("{}", SCHEMA_READY_MESSAGE);
    Ok(pool)
}

/// 풀에서 연결 하나를 빌려 ping을 보냅니다.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

/// `pagamentos` 테이블을 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
pub async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PAGAMENTOS_TABLE).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_a_connection_error() {
        let config = Config {
            database_url: "not a url".to_string(),
            ssl_mode: None,
            max_connections: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
        };

        let err = init_db(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::Connection(_)));
    }

    #[test]
    fn ready_message_is_in_portuguese() {
        assert_eq!(
            SCHEMA_READY_MESSAGE,
            "Conexão com PostgreSQL estabelecida e tabela pronta."
        );
    }

    #[test]
    fn ddl_is_idempotent() {
        assert!(CREATE_PAGAMENTOS_TABLE.contains("IF NOT EXISTS pagamentos"));
    }
}
