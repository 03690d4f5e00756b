#![windows_subsystem = "windows"]

use renders_after_async::{prelude::*, utils::async_sleep};

static TITLE: &'static str = "Renders After Async";

#[derive(Props, Clone, PartialEq)]
struct GreetingProps {
    message: String,
}

#[allow(non_snake_case)]
fn Greeting(props: GreetingProps) -> Element {
    let message = props.message;
    rsx! {
        p { class: "greeting", "Content: {message}" }
    }
}

#[allow(non_snake_case)]
fn Spinner() -> Element {
    rsx! {
        p { class: "loading", "Loading..." }
    }
}

#[allow(non_snake_case)]
fn Failure() -> Element {
    rsx! {
        p { class: "error", "Something went wrong!" }
    }
}

async fn fetch_greeting(props: GreetingProps) -> Result<(), String> {
    async_sleep(1500).await;
    if props.message.is_empty() {
        Err("nothing to say".to_string())
    } else {
        Ok(())
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    log::debug!("App reload");

    let greeting = use_hook(|| {
        renders_after_async(
            fetch_greeting,
            Some(View::plain(Spinner)),
            Some(View::plain(Failure)),
        )(View::new(Greeting))
    });
    let motd = use_hook(|| {
        AsyncOperation::without_input(|| async {
            async_sleep(2500).await;
            Ok::<_, CCStr>("It worked!".to_string())
        })
    });

    use_drop(|| log::debug!("App Dropped"));

    rsx! {
        document::Title { "{TITLE}" }

        div { id: "app",
            h2 { "Wrapped component" }
            {greeting.render(GreetingProps { message: "hi".to_string() })}
            {greeting.render(GreetingProps { message: String::new() })}

            h2 { "Render function" }
            RendersAfterAsync::<String> {
                perform_async: motd,
                render: |state: GateState<String>| match state {
                    GateState::Loading => rsx! {
                        p { "Waiting for the message of the day..." }
                    },
                    GateState::Errored(e) => rsx! {
                        p { class: "error", "{e}" }
                    },
                    GateState::Settled(message) => rsx! {
                        p { "{message}" }
                    },
                },
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    log::info!("starting demo");
    use dioxus::desktop::{Config, WindowBuilder};
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_menu(None).with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(800, 600))
                    .with_resizable(true),
            ),
        )
        .launch(App)
}
