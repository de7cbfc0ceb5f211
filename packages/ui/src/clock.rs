use dioxus::prelude::*;

use crate::app::use_app;

fn now() -> String {
    chrono::Local::now().format("%a %d %b, %H:%M:%S").to_string()
}

/// Wall clock for the navbar, refreshed every `ui.clock_refresh_secs`.
#[component]
pub fn Clock() -> Element {
    let app = use_app();
    let interval = u64::from(app.config.ui.clock_refresh_secs.max(1));
    let mut time = use_signal(now);

    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(interval)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(interval)).await;

                time.set(now());
            }
        });
    });

    rsx! {
        span { class: "clock", "{time}" }
    }
}
