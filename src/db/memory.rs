//! # 메모리 결제 저장소
//!
//! DB 없이 라우터를 테스트하거나 로컬에서 띄워볼 때 사용합니다.
//! id는 PostgreSQL의 SERIAL처럼 1부터 순서대로 증가하고,
//! 금액은 `NewPayment`가 이미 센트 단위로 반올림한 값을 그대로 저장하므로
//! `NUMERIC(10, 2)` 컬럼에 들어가는 값과 같습니다.

use super::PaymentStore;
use crate::{
    error::AppError,
    models::{NewPayment, Payment},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
    records: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 저장된 결제 기록의 사본
    pub async fn records(&self) -> Vec<Payment> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, payment: &NewPayment) -> Result<i64, AppError> {
        let mut records = self.records.write().await;
        let id = next_id(records.len())?;

        records.push(Payment {
            id,
            chave: payment.chave().to_string(),
            valor: payment.valor(),
        });

        Ok(i64::from(id))
    }
}

/// 현재 행 개수 다음의 id를 계산합니다.
///
/// SERIAL(INT4) 범위를 넘으면 PostgreSQL의 시퀀스 소진처럼 저장 실패로 처리합니다.
fn next_id(len: usize) -> Result<i32, AppError> {
    len.checked_add(1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| {
            AppError::Persistence(sqlx::Error::Protocol(
                "pagamentos id sequence exhausted".to_string(),
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentRequest;

    fn new_payment(chave: &str, valor: f64) -> NewPayment {
        PaymentRequest {
            chave: chave.to_string(),
            valor,
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = InMemoryPaymentStore::new();

        assert_eq!(store.insert(&new_payment("a", 1.0)).await.unwrap(), 1);
        assert_eq!(store.insert(&new_payment("a", 1.0)).await.unwrap(), 2);

        let records = store.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].chave, "a");
    }

    #[tokio::test]
    async fn stores_the_amount_rounded_to_cents() {
        let store = InMemoryPaymentStore::new();

        store.insert(&new_payment("k", 0.005)).await.unwrap();

        assert_eq!(store.records().await[0].valor, 0.01);
    }

    #[test]
    fn id_beyond_serial_range_is_a_persistence_error() {
        assert_eq!(next_id(0).unwrap(), 1);
        assert_eq!(next_id(i32::MAX as usize - 1).unwrap(), i32::MAX);
        assert!(matches!(
            next_id(i32::MAX as usize),
            Err(AppError::Persistence(_))
        ));
    }
}
