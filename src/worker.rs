use crate::conversation::Conversation;
use crate::logger::ErrorLog;
use crate::openai::{Translate, TranslationError};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;

pub const SENTINEL: &str = "An error occurred while processing your request.";

/// Collapses a translation result into the text shown to the user. Failures are
/// logged and replaced with [`SENTINEL`].
pub fn resolve(result: Result<String, TranslationError>, log: &ErrorLog) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            log.error(&format!("An error occurred: {}", e));
            SENTINEL.to_string()
        }
    }
}

pub struct WorkerHandle {
    pub jobs: Sender<Conversation>,
    pub results: Receiver<String>,
}

/// Runs translations on a dedicated thread, one at a time. The thread stops
/// once the job sender is dropped.
pub fn spawn<T>(translator: T, log: Arc<ErrorLog>) -> WorkerHandle
where
    T: Translate + Send + 'static,
{
    let (jobs_tx, jobs_rx) = unbounded::<Conversation>();
    let (results_tx, results_rx) = unbounded::<String>();

    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(rt) => rt,
            Err(e) => {
                log.error(&format!("Failed to start translation runtime: {}", e));
                // Keep answering so the UI never waits forever.
                while jobs_rx.recv().is_ok() {
                    if results_tx.send(SENTINEL.to_string()).is_err() {
                        break;
                    }
                }
                return;
            }
        };
        while let Ok(conversation) = jobs_rx.recv() {
            let result = rt.block_on(translator.translate(&conversation));
            let text = resolve(result, &log);
            if results_tx.send(text).is_err() {
                break;
            }
        }
    });

    WorkerHandle { jobs: jobs_tx, results: results_rx }
}
