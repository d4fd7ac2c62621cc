//! # PostgreSQL 결제 저장소
//!
//! `PgPool`은 내부적으로 Arc를 사용하는 연결 풀이라
//! clone해도 같은 풀을 공유하며, 동시 요청에서 안전하게 쓸 수 있습니다.

use super::PaymentStore;
use crate::{error::AppError, models::NewPayment};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgPaymentStore {
    pool: PgPool,
}

impl PgPaymentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentStore for PgPaymentStore {
    /// `INSERT ... RETURNING id`로 한 번의 왕복만에 새 id를 받아옵니다.
    ///
    /// SERIAL 컬럼은 INT4이므로 i32로 읽은 뒤 i64로 넓힙니다.
    /// `valor`(FLOAT8 바인딩)는 NUMERIC(10, 2) 컬럼에 대입되면서 DB가 반올림합니다.
    async fn insert(&self, payment: &NewPayment) -> Result<i64, AppError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO pagamentos (chave, valor) VALUES ($1, $2) RETURNING id",
        )
        .bind(payment.chave())
        .bind(payment.valor())
        .fetch_one(&self.pool)
        .await?;

        Ok(i64::from(id))
    }
}
