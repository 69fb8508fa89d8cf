#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};

use gha_scaleset_core::CommonLabels;
use gha_scaleset_metrics::{app_state::AppState, config, ops, router};

fn state(subsystem: &str) -> AppState {
    let yaml = format!("version: 1\nexporter:\n  subsystem: {subsystem}\n");
    AppState::new(config::load_from_str(&yaml).unwrap()).unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_ok() {
    let resp = ops::healthz().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}

#[tokio::test]
async fn readyz_flips_when_draining() {
    let st = state("gha_controller");

    let resp = ops::readyz(State(st.clone())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ready");

    st.set_draining();
    let resp = ops::readyz(State(st.clone())).await.into_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_string(resp).await, "draining");
}

#[tokio::test]
async fn metrics_endpoint_renders_registry() {
    let st = state("gha_controller");
    let l = CommonLabels::new("myset", "ns1").with_listener_type("standard");
    st.metrics().add_running_listener(&l);
    st.metrics().set_idle_runners(&l, 3);

    let resp = ops::metrics(State(st.clone())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(axum::http::header::CONTENT_TYPE).unwrap().to_str().unwrap(),
        "text/plain; version=0.0.4; charset=utf-8"
    );

    let body = body_string(resp).await;
    assert!(body.contains("# TYPE gha_controller_running_listeners gauge"));
    let idle = body
        .lines()
        .find(|line| line.starts_with("gha_controller_idle_runners{") && line.contains("name=\"myset\""))
        .unwrap();
    assert!(idle.ends_with(" 3"), "{idle}");
}

#[tokio::test]
async fn states_have_isolated_registries() {
    let a = state("gha_controller");
    let b = state("gha_controller");
    let l = CommonLabels::new("myset", "ns1");

    a.metrics().set_running_jobs(&l, 4);

    assert!(a.render_metrics().unwrap().contains("gha_controller_running_jobs{"));
    assert!(!b.render_metrics().unwrap().contains("gha_controller_running_jobs{"));
}

#[test]
fn router_builds() {
    let _app = router::build_router(state("arc"));
}
