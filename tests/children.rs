mod common;

use renders_after_async::prelude::*;

use std::cell::{Cell, RefCell};

use tokio::sync::oneshot;

use common::{html, idle, init_logger, settle};

#[derive(Debug, Clone, PartialEq)]
struct Message {
    message: &'static str,
}

thread_local! {
    static SEEN: RefCell<Vec<GateState<Message>>> = const { RefCell::new(Vec::new()) };
    static CALLS: Cell<usize> = const { Cell::new(0) };
}

fn describe(state: &GateState<Message>) -> String {
    match (state.is_loading(), state.error(), state.data()) {
        (true, _, _) => "loading".to_string(),
        (false, Some(e), _) => format!("error: {e}"),
        (false, None, Some(data)) => format!("data: {}", data.message),
        (false, None, None) => "empty".to_string(),
    }
}

fn record(state: GateState<Message>) -> Element {
    let text = describe(&state);
    SEEN.with_borrow_mut(|seen| seen.push(state));
    rsx! {
        p { "{text}" }
    }
}

#[allow(non_snake_case)]
fn Resolving() -> Element {
    rsx! {
        RendersAfterAsync::<Message> {
            perform_async: AsyncOperation::without_input(|| {
                CALLS.with(|calls| calls.set(calls.get() + 1));
                async {
                    Ok::<_, CCStr>(Message {
                        message: "It worked!",
                    })
                }
            }),
            render: record,
        }
    }
}

#[allow(non_snake_case)]
fn Rejecting() -> Element {
    rsx! {
        RendersAfterAsync::<Message> {
            perform_async: AsyncOperation::without_input(|| async { Err::<Message, _>("boom") }),
            render: record,
        }
    }
}

#[tokio::test]
async fn render_receives_loading_then_data() {
    init_logger();
    let mut dom = VirtualDom::new(Resolving);
    dom.rebuild_in_place();
    assert_eq!(html(&dom), "<p>loading</p>");

    settle(&mut dom).await;

    assert_eq!(html(&dom), "<p>data: It worked!</p>");
    let seen = SEEN.with_borrow(|seen| seen.clone());
    assert_eq!(seen.first(), Some(&GateState::Loading));
    let last = seen.last().expect("render was called");
    assert!(!last.is_loading());
    assert!(last.error().is_none());
    assert_eq!(
        last.data(),
        Some(&Message {
            message: "It worked!"
        })
    );
    assert_eq!(CALLS.with(Cell::get), 1);
}

#[tokio::test]
async fn render_receives_the_failure() {
    init_logger();
    let mut dom = VirtualDom::new(Rejecting);
    dom.rebuild_in_place();

    settle(&mut dom).await;

    assert_eq!(html(&dom), "<p>error: boom</p>");
    let last = SEEN.with_borrow(|seen| seen.last().cloned());
    assert_eq!(last, Some(GateState::Errored(CCStr::from("boom"))));
}

thread_local! {
    static RELEASE: RefCell<Option<oneshot::Receiver<u32>>> = const { RefCell::new(None) };
    static FINISHED: Cell<bool> = const { Cell::new(false) };
    static COUNTS: RefCell<Vec<GateState<u32>>> = const { RefCell::new(Vec::new()) };
}

#[allow(non_snake_case)]
fn Unmounting() -> Element {
    let mut show = use_signal(|| true);
    use_hook(|| {
        spawn(async move { show.set(false) });
    });
    let operation = use_hook(|| {
        AsyncOperation::without_input(|| {
            let release = RELEASE.with_borrow_mut(Option::take);
            async move {
                let count = match release {
                    Some(rx) => rx.await.map_err(|e| e.to_string())?,
                    None => return Err("no release channel".to_string()),
                };
                FINISHED.with(|finished| finished.set(true));
                Ok(count)
            }
        })
    });

    rsx! {
        if show() {
            RendersAfterAsync::<u32> {
                perform_async: operation,
                render: |state: GateState<u32>| {
                    COUNTS.with_borrow_mut(|counts| counts.push(state.clone()));
                    match state.data() {
                        Some(count) => rsx! { "count: {count}" },
                        None => rsx! { "waiting" },
                    }
                },
            }
        }
    }
}

#[tokio::test]
async fn completion_after_unmount_changes_nothing() {
    init_logger();
    let (tx, rx) = oneshot::channel();
    RELEASE.with_borrow_mut(|release| *release = Some(rx));

    let mut dom = VirtualDom::new(Unmounting);
    dom.rebuild_in_place();
    assert!(html(&dom).contains("waiting"));

    // The toggle task hides the adapter while the operation is still pending.
    settle(&mut dom).await;
    assert!(!html(&dom).contains("waiting"));

    tx.send(7).expect("operation is still waiting");
    idle(&mut dom).await;

    assert!(FINISHED.with(Cell::get), "operation was aborted");
    assert!(!html(&dom).contains("count"));
    let counts = COUNTS.with_borrow(|counts| counts.clone());
    assert!(!counts.is_empty());
    assert!(counts.iter().all(GateState::is_loading));
}
