//! Waitlist signup service and background runner
//!
//! Joins run on a worker thread and report back through a channel that the
//! UI drains on every tick.

use crate::model::waitlist::{
    BackgroundJoin, Completion, JoinMessage, JoinTicket, WaitlistError, WaitlistSession,
};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Something that can put an email address on the waitlist
pub trait WaitlistService: Send + Sync {
    fn join(&self, email: &str) -> Result<(), WaitlistError>;
}

/// Stand-in service: waits a fixed latency and always succeeds
pub struct SimulatedWaitlist {
    latency: Duration,
}

impl SimulatedWaitlist {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl WaitlistService for SimulatedWaitlist {
    fn join(&self, email: &str) -> Result<(), WaitlistError> {
        thread::sleep(self.latency);
        tracing::info!(email, "added to waitlist");
        Ok(())
    }
}

/// Runs join requests in the background
pub struct WaitlistRunner {
    service: Arc<dyn WaitlistService>,
    sender: Sender<JoinMessage>,
    job: BackgroundJoin,
}

impl WaitlistRunner {
    pub fn new(service: Arc<dyn WaitlistService>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            service,
            sender,
            job: BackgroundJoin { receiver },
        }
    }

    /// Start a join on a worker thread
    pub fn spawn(&self, ticket: JoinTicket) {
        let service = Arc::clone(&self.service);
        let tx = self.sender.clone();

        tracing::debug!(generation = ticket.generation, "waitlist join started");

        let generation = ticket.generation;
        let worker_tx = tx.clone();
        let spawned = thread::Builder::new()
            .name("waitlist-join".to_string())
            .spawn(move || {
                let result = service.join(&ticket.email);
                // The receiver lives as long as the runner; a send error means
                // the app is shutting down.
                let _ = worker_tx.send(JoinMessage {
                    generation: ticket.generation,
                    result,
                });
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "could not start waitlist worker");
            let _ = tx.send(JoinMessage {
                generation,
                result: Err(WaitlistError::Unavailable),
            });
        }
    }

    /// Apply any finished joins to the session, returns true if it changed
    pub fn poll(&self, session: &mut WaitlistSession) -> bool {
        let mut changed = false;

        while let Ok(message) = self.job.receiver.try_recv() {
            let generation = message.generation;
            let failure = message.result.as_ref().err().cloned();

            match session.complete(message) {
                Completion::Joined => {
                    tracing::info!(generation, "waitlist join completed");
                    changed = true;
                }
                Completion::Failed => {
                    if let Some(e) = failure {
                        tracing::error!(generation, error = %e, "failed to join waitlist");
                    }
                    changed = true;
                }
                Completion::Stale => {
                    tracing::debug!(generation, "discarding stale waitlist completion");
                }
            }
        }

        changed
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::waitlist::JoinState;
    use std::time::Instant;

    /// Service that always fails, for exercising the retry path
    pub(crate) struct FailingWaitlist;

    impl WaitlistService for FailingWaitlist {
        fn join(&self, _email: &str) -> Result<(), WaitlistError> {
            Err(WaitlistError::Request("connection refused".to_string()))
        }
    }

    /// Poll until the predicate holds or a second passes
    pub(crate) fn poll_until(
        runner: &WaitlistRunner,
        session: &mut WaitlistSession,
        done: impl Fn(&WaitlistSession) -> bool,
    ) -> bool {
        let deadline = Instant::now() + Duration::from_secs(1);
        while Instant::now() < deadline {
            runner.poll(session);
            if done(session) {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    fn instant_runner() -> WaitlistRunner {
        WaitlistRunner::new(Arc::new(SimulatedWaitlist::new(Duration::ZERO)))
    }

    #[test]
    fn test_simulated_join_succeeds() {
        assert!(SimulatedWaitlist::new(Duration::ZERO).join("a@b.com").is_ok());
    }

    #[test]
    fn test_runner_completes_join() {
        let runner = instant_runner();
        let mut session = WaitlistSession::new();
        session.open();
        session.set_email("a@b.com");

        let ticket = session.begin_join().unwrap();
        runner.spawn(ticket);
        assert_eq!(session.state, JoinState::Joining);

        assert!(poll_until(&runner, &mut session, |s| s.has_joined()));
    }

    #[test]
    fn test_runner_drops_completion_for_closed_session() {
        let runner = WaitlistRunner::new(Arc::new(SimulatedWaitlist::new(
            Duration::from_millis(20),
        )));
        let mut session = WaitlistSession::new();
        session.open();
        session.set_email("a@b.com");
        runner.spawn(session.begin_join().unwrap());

        session.reset();
        session.open();

        thread::sleep(Duration::from_millis(100));
        runner.poll(&mut session);
        assert_eq!(session.state, JoinState::Idle);
        assert!(!session.has_joined());
    }

    #[test]
    fn test_runner_surfaces_failure() {
        let runner = WaitlistRunner::new(Arc::new(FailingWaitlist));
        let mut session = WaitlistSession::new();
        session.set_email("a@b.com");
        runner.spawn(session.begin_join().unwrap());

        assert!(poll_until(&runner, &mut session, |s| s.error.is_some()));
        assert_eq!(session.state, JoinState::Idle);
        assert_eq!(session.email, "a@b.com");
    }

    #[test]
    fn test_poll_without_jobs_is_quiet() {
        let runner = instant_runner();
        let mut session = WaitlistSession::new();
        assert!(!runner.poll(&mut session));
    }
}
