//! # 홈(Home) 핸들러
//!
//! 서버가 떠 있는지 확인하는 가장 단순한 엔드포인트입니다.
//! DB 연결은 시작 시점에 이미 검증되었으므로, 여기까지 요청이 왔다면 연결된 상태입니다.

/// 인사말 본문
pub const GREETING: &str = "API de Pagamentos no ar! (Conectado ao DB)";

/// `ANY /` — 고정된 인사말을 텍스트로 반환합니다.
///
/// `&'static str`을 반환하면 Axum이 200 OK + `text/plain; charset=utf-8`로 응답합니다.
pub async fn home() -> &'static str {
    GREETING
}
