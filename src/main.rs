use leptos::*;

use poi_moderation::{config::Config, App};

pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    spawn_local(async {
        match Config::load().await {
            Ok(config) => {
                log::info!("Start moderation panel");
                mount_to_body(move || view! { <App config /> });
            }
            Err(err) => {
                log::error!("Invalid configuration: {err:#}");
            }
        }
    });
}
