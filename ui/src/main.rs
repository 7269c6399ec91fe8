#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use userdir_business::{DirectoryConfig, UserDirectoryClient};
use userdir_ui::DirectoryApp;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = dotenvy::dotenv() {
        log::debug!("no .env file loaded: {err}");
    }

    let config = DirectoryConfig::from_env().unwrap_or_else(|err| {
        log::error!("{err}; using the default endpoint");
        DirectoryConfig::default()
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "User Directory",
        native_options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            let client = UserDirectoryClient::from_config(&config)
                .with_waker(move || egui_ctx.request_repaint());
            Ok(Box::new(DirectoryApp::new(client, handle)))
        }),
    )
}
