use super::{
    repository::LoginRepository,
    utils::{self, LoginErrors},
};
use crate::{
    api::{ApiClient, Credentials},
    router::DASHBOARD_PATH,
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Redirecting,
    Failed,
}

impl LoginPhase {
    /// A request is in flight or navigation already started.
    pub fn is_busy(self) -> bool {
        matches!(self, LoginPhase::Submitting | LoginPhase::Redirecting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Redirect(&'static str),
    Rejected(LoginErrors),
}

/// Sends the credentials and maps the result onto the form. Non-200 statuses and
/// transport failures both surface as the generic credentials message.
pub async fn submit_credentials(repo: &LoginRepository, credentials: Credentials) -> SubmitOutcome {
    match repo.login(credentials).await {
        Ok(()) => SubmitOutcome::Redirect(DASHBOARD_PATH),
        Err(err) => {
            match err.status() {
                Some(status) => log::warn!("login rejected with status {}", status),
                None => log::error!("login request failed: {}", err),
            }
            SubmitOutcome::Rejected(LoginErrors::incorrect_credentials())
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub errors: RwSignal<LoginErrors>,
    pub phase: RwSignal<LoginPhase>,
    repo: LoginRepository,
}

impl LoginViewModel {
    pub fn new(repo: LoginRepository) -> Self {
        Self {
            form: LoginFormState::default(),
            errors: create_rw_signal(LoginErrors::default()),
            phase: create_rw_signal(LoginPhase::Idle),
            repo,
        }
    }

    pub fn pending(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get().is_busy())
    }

    pub fn reset_errors(&self) {
        self.errors.set(LoginErrors::default());
    }

    /// Validates the form and claims the in-flight slot. `None` means nothing should
    /// be sent: either a request is already running or validation failed.
    pub fn begin_submit(&self) -> Option<Credentials> {
        if self.phase.get_untracked().is_busy() {
            log::debug!("login already in flight, ignoring submit");
            return None;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();

        match utils::validate_credentials(&email, &password) {
            Ok(credentials) => {
                self.reset_errors();
                self.phase.set(LoginPhase::Submitting);
                Some(credentials)
            }
            Err(errors) => {
                self.errors.set(errors);
                self.phase.set(LoginPhase::Failed);
                None
            }
        }
    }

    /// Returns the page to navigate to, if any. A response that outlives the view is
    /// dropped.
    pub fn finish_submit(&self, outcome: SubmitOutcome) -> Option<&'static str> {
        if self.phase.try_get_untracked().is_none() {
            log::debug!("login view disposed, dropping response");
            return None;
        }
        match outcome {
            SubmitOutcome::Redirect(target) => {
                self.phase.set(LoginPhase::Redirecting);
                Some(target)
            }
            SubmitOutcome::Rejected(errors) => {
                self.errors.set(errors);
                self.phase.set(LoginPhase::Failed);
                None
            }
        }
    }

    pub fn submit(&self) {
        let Some(credentials) = self.begin_submit() else {
            return;
        };
        let vm = self.clone();
        spawn_local(async move {
            let outcome = submit_credentials(&vm.repo, credentials).await;
            if let Some(target) = vm.finish_submit(outcome) {
                if let Err(err) = navigation::redirect_to(target) {
                    log::error!("{}", err);
                }
            }
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginViewModel::new(LoginRepository::new_with_client(Rc::new(api)))
}
