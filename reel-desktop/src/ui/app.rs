use crate::ui::app_context::AppContext;
use crate::ui::app_service::AppService;
use crate::ui::components::Home;

use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_background_color((0x0f, 0x11, 0x16, 0xff))
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("reel")
        .with_always_on_top(false)
        .with_decorations(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
        .with_background_color((0x0f, 0x11, 0x16, 0xff))
}

pub fn launch_app(context: AppContext) {
    LaunchBuilder::desktop()
        .with_cfg(make_config())
        // Provide the Send-safe context; AppService is created inside the
        // component so its Signal lives on the UI runtime.
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

#[component]
fn App() -> Element {
    let context = use_context::<AppContext>();
    let app = use_hook(|| AppService::new(&context));
    use_context_provider(|| app.clone());

    use_hook(|| app.initialize());

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Home {}
    }
}
