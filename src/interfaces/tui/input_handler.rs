//! Input handling utilities
//!
//! Routes typed characters to the text field of the current screen

use super::app::{App, CurrentScreen, LoginField, PasswordField};

/// Field that receives typed characters, if any.
fn active_input(app: &mut App) -> Option<&mut String> {
    match app.current_screen {
        CurrentScreen::Home => Some(&mut app.url_input),
        CurrentScreen::Admin if app.search_focused => Some(&mut app.search_input),
        CurrentScreen::Login => match app.login_field {
            LoginField::Username => Some(&mut app.username_input),
            LoginField::Password => Some(&mut app.password_input),
        },
        CurrentScreen::ChangePass => match app.password_field {
            PasswordField::Password => Some(&mut app.new_pass_input),
            PasswordField::Confirm => Some(&mut app.confirm_input),
        },
        CurrentScreen::Resolve => Some(&mut app.path_input),
        _ => None,
    }
}

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if let Some(input) = active_input(app) {
        input.push(c);
    }
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    if let Some(input) = active_input(app) {
        input.pop();
    }
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App) {
    match app.current_screen {
        CurrentScreen::Login => {
            app.login_field = match app.login_field {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
        }
        CurrentScreen::ChangePass => {
            app.password_field = match app.password_field {
                PasswordField::Password => PasswordField::Confirm,
                PasswordField::Confirm => PasswordField::Password,
            };
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::interfaces::tui::app::test_app;

    #[test]
    fn test_typing_follows_login_field() {
        let mut app = test_app(&FakeTransport::arc());
        app.show_login();
        handle_text_input(&mut app, 'a');
        handle_tab_navigation(&mut app);
        handle_text_input(&mut app, 'p');
        handle_text_input(&mut app, 'w');
        handle_backspace(&mut app);
        assert_eq!(app.username_input, "a");
        assert_eq!(app.password_input, "p");
    }

    #[test]
    fn test_admin_ignores_text_until_search_focused() {
        let mut app = test_app(&FakeTransport::arc());
        app.switch_to(CurrentScreen::Admin);
        handle_text_input(&mut app, 'x');
        assert!(app.search_input.is_empty());
        app.search_focused = true;
        handle_text_input(&mut app, 'x');
        assert_eq!(app.search_input, "x");
    }
}
