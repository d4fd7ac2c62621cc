//! # 결제(Payment) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `POST /pagamentos` → 결제 기록 생성, `201 {"transacao_id": <id>}`
//! - 그 외 메서드       → `405 Método não permitido`
//!
//! ## 처리 흐름
//! 1. 본문을 JSON으로 디코딩 (실패 시 400 `JSON inválido: ...`)
//! 2. 검증 (실패 시 400 `Dados inválidos: ...`)
//! 3. 저장소에 INSERT (실패 시 500 `Erro ao salvar pagamento: ...`)
//! 4. 201 + JSON 응답
//!
//! 각 단계는 `?`로 에러를 즉시 반환합니다.
//! 에러 응답을 쓴 뒤에 다음 단계로 넘어가는 일이 없으므로
//! 요청 하나에 응답은 정확히 하나이고, 잘못된 요청으로는 행이 생기지 않습니다.

use crate::{
    error::AppError,
    models::{PaymentRequest, PaymentResponse},
    routes::AppState,
};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Deserialize;

/// `POST /pagamentos` — 결제 기록을 하나 생성합니다.
///
/// # Extractor
/// - `body: Bytes`: `Json` 추출기 대신 원본 바이트를 받습니다.
///   `Json`은 Content-Type 헤더가 없으면 415를 돌려주지만,
///   이 API는 헤더와 상관없이 본문만 보고 판단하고 모든 파싱 에러를 400으로 보고합니다.
pub async fn create_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<PaymentResponse>), AppError> {
    let payment = decode_payment(&body)?.validate()?;

    let id = state.store.insert(&payment).await?;
    tracing::info!(transacao_id = id, chave = payment.chave(), "Payment recorded");

    Ok((StatusCode::CREATED, Json(PaymentResponse { transacao_id: id })))
}

/// `/pagamentos`에 POST 이외의 메서드로 들어온 요청
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// 본문에서 첫 번째 JSON 값을 읽어 `PaymentRequest`로 변환합니다.
///
/// 첫 값 뒤에 남은 바이트는 확인하지 않습니다.
fn decode_payment(body: &[u8]) -> Result<PaymentRequest, AppError> {
    let mut de = serde_json::Deserializer::from_slice(body);
    PaymentRequest::deserialize(&mut de).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_complete_object() {
        let req = decode_payment(br#"{"chave":"abc123","valor":50.00}"#).unwrap();
        assert_eq!(req.chave, "abc123");
        assert_eq!(req.valor, 50.0);
    }

    #[test]
    fn ignores_bytes_after_the_first_value() {
        let req = decode_payment(b"{\"chave\":\"k\",\"valor\":1}\n{\"junk\"").unwrap();
        assert_eq!(req.chave, "k");
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        assert!(matches!(decode_payment(b""), Err(AppError::Decode(_))));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let err = decode_payment(br#"{"chave":"k","valor":"dez"}"#).unwrap_err();
        assert!(err.to_string().starts_with("JSON inválido: "));
    }
}
