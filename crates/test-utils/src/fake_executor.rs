use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use vmcli_wrapper::errors::CommandFailed;
use vmcli_wrapper::exec::{ExecuteFuture, VmcliExecutor};

/// One scripted reply of a [`FakeVmcli`].
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Output(String),
    Fail { exit_code: i32, error: String },
}

/// A fake executor that:
/// - records every argument vector it is asked to run
/// - replies with scripted responses in order, then with empty output.
#[derive(Debug, Clone, Default)]
pub struct FakeVmcli {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    responses: Arc<Mutex<VecDeque<FakeResponse>>>,
}

impl FakeVmcli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, output: impl Into<String>) -> Self {
        self.push(FakeResponse::Output(output.into()))
    }

    pub fn respond_json(self, value: &Value) -> Self {
        self.respond(value.to_string())
    }

    pub fn fail(self, exit_code: i32, error: impl Into<String>) -> Self {
        self.push(FakeResponse::Fail {
            exit_code,
            error: error.into(),
        })
    }

    /// Argument vectors seen so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn push(self, response: FakeResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }
}

impl VmcliExecutor for FakeVmcli {
    fn execute(&self, arguments: Vec<String>) -> ExecuteFuture<'_> {
        let calls = Arc::clone(&self.calls);
        let next = self.responses.lock().unwrap().pop_front();

        Box::pin(async move {
            {
                let mut guard = calls.lock().unwrap();
                guard.push(arguments.clone());
            }

            match next {
                None => Ok(String::new()),
                Some(FakeResponse::Output(text)) => Ok(text),
                Some(FakeResponse::Fail { exit_code, error }) => {
                    Err(CommandFailed::new(exit_code, arguments, "", error).into())
                }
            }
        })
    }
}
