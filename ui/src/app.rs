use tokio::runtime::Handle;
use userdir_business::UserDirectoryClient;

use crate::widgets;

pub struct DirectoryApp {
    client: UserDirectoryClient,
    runtime: Handle,
    mounted: bool,
}

impl DirectoryApp {
    /// Background work is spawned on `runtime`; the collection is fetched on the first frame.
    pub fn new(client: UserDirectoryClient, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            mounted: false,
        }
    }

    pub fn client(&self) -> &UserDirectoryClient {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut UserDirectoryClient {
        &mut self.client
    }
}

impl eframe::App for DirectoryApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.mounted {
            self.mounted = true;
            log::info!("loading users from {}", self.client.api().users_url());
            self.client.spawn_load_all(&self.runtime);
        }

        self.client.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::user_directory_panel(&mut self.client, &self.runtime, ui);
        });
    }
}
