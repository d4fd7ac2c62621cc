//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 라우트 핸들러(routes/)는 DB 드라이버를 직접 만지지 않고
//! `PaymentStore` 트레이트를 통해서만 결제를 저장합니다.
//!
//! 각 하위 모듈:
//! - `schema`: 시작 시 연결/ping/테이블 생성을 담당하는 스키마 초기화
//! - `payments`: PostgreSQL 기반 `PaymentStore` 구현
//! - `memory`: 테스트와 로컬 개발용 메모리 기반 `PaymentStore` 구현

pub mod memory;
pub mod payments;
pub mod schema;

pub use memory::InMemoryPaymentStore;
pub use payments::PgPaymentStore;
pub use schema::*;

use crate::{error::AppError, models::NewPayment};
use async_trait::async_trait;

/// 결제 기록 저장소
///
/// `Send + Sync`: 여러 요청 태스크가 동시에 같은 저장소를 공유하므로 필요합니다.
/// 핸들러는 `Arc<dyn PaymentStore>`로 받기 때문에 구현체를 자유롭게 바꿀 수 있습니다.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// 결제 한 건을 저장하고 새로 생성된 id를 반환합니다.
    ///
    /// 같은 내용을 두 번 저장하면 서로 다른 id를 가진 두 행이 생깁니다 (중복 제거 없음).
    async fn insert(&self, payment: &NewPayment) -> Result<i64, AppError>;
}
