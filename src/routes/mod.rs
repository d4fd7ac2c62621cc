//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `home`: 서버 동작 확인용 인사말 (`/` 및 매칭되지 않은 모든 경로)
//! - `payments`: 결제 생성 (`POST /pagamentos`)

pub mod home;
pub mod payments;

pub use home::*;
pub use payments::*;

use crate::db::PaymentStore;
use axum::{
    routing::{any, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 저장소를 전역 변수가 아닌 상태로 주입하기 때문에
/// 테스트에서는 `InMemoryPaymentStore`를 넣어 DB 없이 라우터를 검증할 수 있습니다.
#[derive(Clone)]
pub struct AppState {
    /// 결제 저장소 (Arc로 감싸서 clone해도 같은 저장소를 가리킵니다)
    pub store: Arc<dyn PaymentStore>,
}

impl AppState {
    pub fn new(store: impl PaymentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// 전체 라우터를 구성합니다.
///
/// - `/`: 모든 메서드에 인사말로 응답
/// - `/pagamentos`: POST만 허용하고, 나머지 메서드는 405 + 텍스트 메시지
/// - 그 외 경로: `/`와 같은 인사말 (fallback)
pub fn create_router(state: AppState) -> Router {
    // Router::new(): 빈 라우터를 생성합니다.
    // .route(): URL 패턴과 핸들러 함수를 연결합니다.
    Router::new()
        // any(): GET, POST 등 모든 HTTP 메서드를 같은 핸들러로 보냅니다.
        .route("/", any(home))
        // post(): POST 요청만 create_payment로 연결합니다.
        // .fallback(): 이 경로에서 POST 이외의 메서드가 들어왔을 때 실행됩니다.
        //   Axum 기본 405 응답은 본문이 비어 있으므로 직접 메시지를 돌려줍니다.
        .route(
            "/pagamentos",
            post(create_payment).fallback(method_not_allowed),
        )
        // 위 경로 어디에도 매칭되지 않는 요청은 인사말로 응답합니다.
        .fallback(home)
        // .layer(): 미들웨어를 추가합니다.
        .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
        // .with_state(): 모든 핸들러에서 State<AppState>를 쓸 수 있게 합니다.
        .with_state(state)
}
