//! # 결제(Payment) 모델 정의
//!
//! `pagamentos` 테이블과 `/pagamentos` 엔드포인트가 주고받는 구조체들입니다.
//!
//! ## 구조체 역할
//! - `Payment`: DB에 저장된 결제 기록 한 행
//! - `PaymentRequest`: 클라이언트가 보내는 JSON 본문
//! - `NewPayment`: 검증을 통과한 요청. 저장소는 이 타입만 받습니다.
//! - `PaymentResponse`: 생성 성공 시 돌려주는 JSON 본문

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// 결제 기록 — DB의 `pagamentos` 테이블 한 행에 대응합니다.
///
/// `valor`는 DB에서 `NUMERIC(10, 2)`이므로 조회할 때 `valor::FLOAT8`로 변환해 읽습니다.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Payment {
    /// DB가 생성한 일련번호 (SERIAL)
    pub id: i32,
    /// 호출자가 정한 결제 키/참조값
    pub chave: String,
    /// 금액 (소수점 둘째 자리까지 저장)
    pub valor: f64,
}

/// 결제 생성 요청 — `POST /pagamentos`의 요청 본문입니다.
///
/// `#[serde(default)]`: 필드가 빠져 있으면 빈 문자열 / 0.0으로 채웁니다.
/// 필드 누락은 JSON 파싱 에러가 아니라 검증 에러(400 Dados inválidos)로 처리됩니다.
/// 알 수 없는 필드는 무시합니다.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub chave: String,
    pub valor: f64,
}

impl PaymentRequest {
    /// `chave`가 비어 있지 않고 `valor`가 0보다 큰지 검사합니다.
    ///
    /// 금액은 컬럼과 같은 소수점 둘째 자리(센트)로 반올림한 뒤 검사합니다.
    /// 0.004처럼 반올림하면 0.00이 되는 금액은 거부됩니다.
    /// 통과하면 소유권을 넘겨받아 반올림된 금액으로 `NewPayment`를 만듭니다.
    pub fn validate(self) -> Result<NewPayment, AppError> {
        // f64::round(): 0.5는 0에서 먼 쪽으로 반올림합니다 (PostgreSQL NUMERIC과 같은 규칙)
        let cents = (self.valor * 100.0).round();
        if self.chave.is_empty() || cents <= 0.0 {
            return Err(AppError::Validation);
        }
        Ok(NewPayment {
            chave: self.chave,
            valor: cents / 100.0,
        })
    }
}

/// 검증을 통과한 결제 데이터
///
/// 필드가 비공개이므로 `PaymentRequest::validate`를 거치지 않고는 만들 수 없습니다.
#[derive(Debug, Clone)]
pub struct NewPayment {
    chave: String,
    valor: f64,
}

impl NewPayment {
    pub fn chave(&self) -> &str {
        &self.chave
    }

    pub fn valor(&self) -> f64 {
        self.valor
    }
}

/// 결제 생성 응답 — `{"transacao_id": 1}`
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub transacao_id: i64,
}
