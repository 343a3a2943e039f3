#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::sync::Arc;

mod config;
mod controller;
mod conversation;
mod input;
mod logger;
mod openai;
mod ui;
mod worker;

fn main() {
    let mut cfg = config::Config::load();
    cfg.apply_env(|k| std::env::var(k).ok());
    let log = Arc::new(logger::ErrorLog::new(cfg.log_path()));

    let client = match openai::OpenAiClient::new(&cfg) {
        Ok(c) => c,
        Err(e) => {
            log.error(&format!("Failed to build HTTP client: {}", e));
            std::process::exit(1);
        }
    };

    let handle = worker::spawn(client, Arc::clone(&log));
    ui::run(controller::Controller::new(handle), &log);
}
