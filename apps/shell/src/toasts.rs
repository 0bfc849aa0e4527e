//! Terminal toast display.
//!
//! Prints each toast to stderr when it appears. Runs as a background task
//! next to the command so toasts show up as they happen.

use fintrack_core::{diff_frames, NotificationRenderer, NotificationStore, ToastCard};
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Running,
    AfterExpiry,
    Now,
}

pub struct ToastPrinter {
    finished: watch::Sender<Finish>,
    task: JoinHandle<()>,
}

impl ToastPrinter {
    pub fn spawn(store: &NotificationStore) -> Self {
        let renderer = NotificationRenderer::new(store);
        let (finished, finished_rx) = watch::channel(Finish::Running);
        let task = tokio::spawn(print_toasts(renderer, finished_rx));
        Self { finished, task }
    }

    /// Signals that the command is done and waits until every visible toast
    /// has expired or been dismissed.
    pub async fn finish(self) {
        self.stop(Finish::AfterExpiry).await;
    }

    /// Prints whatever is still pending and returns without waiting for
    /// expiry.
    pub async fn finish_now(self) {
        self.stop(Finish::Now).await;
    }

    async fn stop(self, finish: Finish) {
        let _ = self.finished.send(finish);
        if let Err(e) = self.task.await {
            tracing::warn!("Toast printer stopped abnormally: {}", e);
        }
    }
}

fn show(visible: &[ToastCard], frame: &[ToastCard]) {
    let diff = diff_frames(visible, frame);
    for card in &diff.shown {
        eprintln!("{}", card);
    }
    for id in &diff.hidden {
        tracing::debug!("Toast #{} left the screen", id);
    }
}

async fn print_toasts(mut renderer: NotificationRenderer, mut finished: watch::Receiver<Finish>) {
    let mut visible: Vec<ToastCard> = Vec::new();

    loop {
        let finish = *finished.borrow_and_update();
        if finish != Finish::Running {
            let frame = renderer.render();
            show(&visible, &frame);
            visible = frame;
            if finish == Finish::Now || visible.is_empty() {
                break;
            }
        }

        tokio::select! {
            frame = renderer.next_frame() => {
                let Some(frame) = frame else { break };
                show(&visible, &frame);
                visible = frame;
            }
            changed = finished.changed(), if finish == Finish::Running => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
}
