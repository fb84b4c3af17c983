use crate::api::{ApiError, NewUser, User};
use crate::config::Config;
use crate::ui::form::Field;
use crate::ui::signup::SignUpController;
use crate::ui::view::{Control, ViewModel};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Screens the app can navigate between.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    SignUp,
    Home,
}

/// Work handed from the UI thread to the submission worker.
#[derive(Debug)]
pub enum UiCommand {
    SignUp { generation: u64, user: NewUser },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Observer notified whenever the app changes route.
pub type NavigationHook = Arc<dyn Fn(Route) + Send + Sync>;

pub struct App {
    should_quit: bool,
    route: Route,
    controller: SignUpController,
    focus: Control,
    command_sender: Option<UiCommandSender>,
    redirect_delay: Option<Duration>,
    /// Set once sign-up succeeds and an automatic redirect is configured.
    redirect_at: Option<Instant>,
    account: Option<User>,
    navigation_hook: Option<NavigationHook>,
    endpoint: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            route: Route::SignUp,
            controller: SignUpController::new(),
            focus: Control::Input(Field::Username),
            command_sender: None,
            redirect_delay: config.navigation.redirect_delay(),
            redirect_at: None,
            account: None,
            navigation_hook: None,
            endpoint: config.api.users_url(),
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn set_navigation_hook(&mut self, hook: NavigationHook) {
        self.navigation_hook = Some(hook);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quit and unmount the form so a late response is not applied.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.controller.unmount();
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Account endpoint shown in the header.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn controller(&self) -> &SignUpController {
        &self.controller
    }

    /// Account created by the last successful sign-up.
    pub fn account(&self) -> Option<&User> {
        self.account.as_ref()
    }

    pub fn view_model(&self) -> ViewModel {
        match self.route {
            Route::SignUp => ViewModel::sign_up(&self.controller),
            Route::Home => ViewModel::home(self.account.as_ref().map(|u| u.username.as_str())),
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    /// Leaving an input counts as a blur for that field.
    fn move_focus(&mut self, delta: isize) {
        let controls = self.view_model().controls();
        if controls.is_empty() {
            return;
        }
        let current = controls.iter().position(|c| *c == self.focus).unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(controls.len() as isize) as usize;
        let previous = self.focus;
        self.focus = controls[next];
        if previous != self.focus {
            if let Control::Input(field) = previous {
                self.controller.set_touched(field);
            }
        }
    }

    pub fn type_char(&mut self, ch: char) {
        let Control::Input(field) = self.focus else {
            return;
        };
        let mut value = self.controller.form().value(field).to_string();
        value.push(ch);
        self.controller.set_value(field, value);
    }

    pub fn backspace(&mut self) {
        let Control::Input(field) = self.focus else {
            return;
        };
        let mut value = self.controller.form().value(field).to_string();
        if value.pop().is_some() {
            self.controller.set_value(field, value);
        }
    }

    /// Enter: advance from an input, press a button.
    pub fn activate(&mut self) {
        match self.focus {
            Control::Input(_) => self.focus_next(),
            Control::Submit => self.submit(),
            Control::Start => self.navigate(Route::Home),
        }
    }

    pub fn submit(&mut self) {
        if self.route != Route::SignUp {
            return;
        }
        let Some(ticket) = self.controller.submit() else {
            return;
        };

        let generation = ticket.generation;
        let command = UiCommand::SignUp {
            generation,
            user: ticket.user,
        };
        let sent = match &self.command_sender {
            Some(sender) => sender.try_send(command).map_err(|e| e.to_string()),
            None => Err("no submission worker attached".to_string()),
        };
        if let Err(reason) = sent {
            tracing::error!(generation, reason = %reason, "Failed to dispatch sign-up");
            self.on_signup_finished(generation, Err(ApiError::Unavailable(reason)));
        }
    }

    /// Feed back the outcome of request `generation`.
    pub fn on_signup_finished(&mut self, generation: u64, outcome: Result<User, ApiError>) {
        if !self.controller.complete(generation, outcome) {
            return;
        }
        if let Some(user) = self.controller.submission().user() {
            self.account = Some(user.clone());
            self.focus = Control::Start;
            self.redirect_at = self.redirect_delay.map(|delay| Instant::now() + delay);
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.redirect_at {
            if Instant::now() >= deadline {
                self.navigate(Route::Home);
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        tracing::info!(?route, "Navigating");
        self.route = route;
        self.redirect_at = None;
        if route == Route::Home {
            self.controller.unmount();
        }
        if let Some(first) = self.view_model().controls().first() {
            self.focus = *first;
        }
        if let Some(hook) = &self.navigation_hook {
            hook(route);
        }
    }
}
