#![allow(dead_code)]

use dioxus::prelude::*;

use std::time::Duration;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

/// Drives pending tasks until some scope needs to re-render, then re-renders.
pub async fn settle(dom: &mut VirtualDom) {
    tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work())
        .await
        .expect("a task should have made a scope dirty");
    dom.render_immediate_to_vec();
}

/// Gives pending tasks a chance to run when nothing is expected to change.
pub async fn idle(dom: &mut VirtualDom) {
    let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
    dom.render_immediate_to_vec();
}
