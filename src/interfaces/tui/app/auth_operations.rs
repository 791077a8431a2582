//! Login, logout and password change

use super::state::{App, CurrentScreen, LoginField, PasswordField};

impl App {
    pub fn show_login(&mut self) {
        self.username_input.clear();
        self.password_input.clear();
        self.login_field = LoginField::Username;
        self.switch_to(CurrentScreen::Login);
    }

    pub async fn submit_login(&mut self) {
        let service = match self.ctx.auth_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let outcome = service
            .login(&self.username_input, &self.password_input)
            .await;
        if outcome.navigation.is_some() {
            self.password_input.clear();
            self.clear_notice();
        }
        self.apply_outcome(outcome).await;
    }

    /// Goes home once the request completed; a transport error is only logged.
    pub async fn logout(&mut self) {
        let service = match self.ctx.auth_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let outcome = service.logout().await;
        if outcome.navigation.is_some() {
            self.records = None;
            self.search_input.clear();
            self.show_home();
            self.set_status("Logged out");
        }
    }

    /// Page load with the admin check.
    pub async fn open_change_pass(&mut self) {
        let service = match self.ctx.auth_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        match service.require_admin().await {
            Ok(None) => {
                self.new_pass_input.clear();
                self.confirm_input.clear();
                self.password_field = PasswordField::Password;
                self.switch_to(CurrentScreen::ChangePass);
            }
            Ok(Some(_)) => self.show_login(),
            Err(e) => self.init_failed(e),
        }
    }

    pub async fn submit_change_pass(&mut self) {
        let service = match self.ctx.auth_service().await {
            Ok(service) => service,
            Err(e) => return self.init_failed(e),
        };
        let outcome = service
            .change_password(&self.new_pass_input, &self.confirm_input)
            .await;
        if !outcome.is_error() {
            self.new_pass_input.clear();
            self.confirm_input.clear();
        }
        // 成功后跳转登录页，提示保留
        self.apply_outcome(outcome).await;
    }
}
