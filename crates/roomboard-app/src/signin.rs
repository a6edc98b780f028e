//! Sign-in and registration form served on `/`.

use crate::{AppAction, KeyInput, TextInput};

/// Shown when the form is submitted with a blank field.
pub const MISSING_FIELDS: &str = "Preencha e-mail e senha.";

/// Shown after a registration that did not open a session.
pub const VERIFY_EMAIL_NOTICE: &str = "Conta criada. Verifique seu e-mail e entre.";

/// Focusable elements, in Tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignInField {
    /// Email input.
    #[default]
    Email,
    /// Password input.
    Password,
    /// Submit button.
    Submit,
    /// Sign-in/registration toggle link.
    Toggle,
}

impl SignInField {
    fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::Toggle,
            Self::Toggle => Self::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Email => Self::Toggle,
            Self::Password => Self::Email,
            Self::Submit => Self::Password,
            Self::Toggle => Self::Submit,
        }
    }
}

/// Email/password form state.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    email: TextInput,
    password: TextInput,
    focus: SignInField,
    register: bool,
    submitting: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl SignInForm {
    /// Empty form in sign-in mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a key press. Returns the actions to execute.
    pub fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Tab | KeyInput::Down => self.focus = self.focus.next(),
            KeyInput::Up => self.focus = self.focus.prev(),
            KeyInput::Enter => match self.focus {
                SignInField::Email => self.focus = SignInField::Password,
                SignInField::Password | SignInField::Submit => return self.submit(),
                SignInField::Toggle => self.toggle_mode(),
            },
            _ => {
                let field = match self.focus {
                    SignInField::Email => &mut self.email,
                    SignInField::Password => &mut self.password,
                    SignInField::Submit | SignInField::Toggle => return vec![],
                };
                if !field.apply(key) {
                    return vec![];
                }
            },
        }
        vec![AppAction::Render]
    }

    /// Submit the form. Ignored while a request is in flight.
    pub fn submit(&mut self) -> Vec<AppAction> {
        if self.submitting {
            return vec![];
        }

        let email = self.email.text().trim().to_owned();
        let password = self.password.text().to_owned();
        if email.is_empty() || password.is_empty() {
            self.error = Some(MISSING_FIELDS.into());
            return vec![AppAction::Render];
        }

        self.submitting = true;
        self.error = None;
        self.notice = None;
        let action = if self.register {
            AppAction::SignUp { email, password }
        } else {
            AppAction::SignIn { email, password }
        };
        vec![action, AppAction::Render]
    }

    /// Switch between sign-in and registration.
    pub fn toggle_mode(&mut self) {
        self.register = !self.register;
        self.error = None;
    }

    /// A session was issued.
    pub fn signed_in(&mut self) {
        self.submitting = false;
        self.error = None;
        self.notice = None;
        self.password.clear();
    }

    /// The provider rejected the request.
    pub fn auth_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Registration succeeded but no session was issued.
    pub fn sign_up_pending(&mut self) {
        self.submitting = false;
        self.register = false;
        self.password.clear();
        self.notice = Some(VERIFY_EMAIL_NOTICE.into());
    }

    /// Email field.
    pub fn email(&self) -> &TextInput {
        &self.email
    }

    /// Password field.
    pub fn password(&self) -> &TextInput {
        &self.password
    }

    /// Focused element.
    pub fn focus(&self) -> SignInField {
        self.focus
    }

    /// Registration mode is active.
    pub fn is_register(&self) -> bool {
        self.register
    }

    /// A request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Last provider error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Informational notice.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Form title.
    pub fn title(&self) -> &'static str {
        if self.register { "Crie sua conta" } else { "Faça login" }
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        if self.register { "Registrar" } else { "Entrar" }
    }

    /// Toggle link label.
    pub fn toggle_label(&self) -> &'static str {
        if self.register { "Já tem conta? Entrar" } else { "Não tem conta? Registrar" }
    }
}
