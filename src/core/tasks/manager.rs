use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::{
    pipeline::run_pipeline,
    stages::PipelineTiming,
};

/// Owns the worker runtime and the channel the GUI polls every frame.
/// One pipeline run at a time; the app enforces that by disabling the
/// trigger until `RunFinished` comes back.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn start_run(&self, text: String, base_url: String, timing: PipelineTiming) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let event_sender = sender.clone();
            let report = move |event| {
                let _ = event_sender.send(TaskResult::Pipeline(event));
            };

            let result = runtime.block_on(async {
                run_pipeline(&text, &base_url, timing, &report).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::RunFinished(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;

    #[test]
    fn run_always_terminates_with_run_finished() {
        let mut manager = TaskManager::new();
        manager.start_run(
            "entropy entropy osmosis gradient".to_string(),
            "http://127.0.0.1:9".to_string(),
            PipelineTiming::immediate(),
        );

        let deadline = Instant::now() + Duration::from_secs(30);
        loop {
            for result in manager.poll_results() {
                if let TaskResult::RunFinished(outcome) = result {
                    assert_eq!(outcome.unwrap().len(), 10);
                    return;
                }
            }
            assert!(Instant::now() < deadline, "run never finished");
            thread::sleep(Duration::from_millis(10));
        }
    }
}
