//! The rendering seam between the loader and whatever displays the
//! dashboard. Text slots are addressed by the element ids of the original
//! dashboard page.

use crate::types::UserProfile;

pub const WELCOME_USER: &str = "welcomeUser";
pub const XP_VALUE: &str = "xpValue";
pub const QUIZ_COUNT: &str = "quizCount";
pub const ACCURACY_VALUE: &str = "accuracyValue";
pub const STREAK_VALUE: &str = "streakValue";

/// Where loads with a missing or rejected credential send the user.
pub const LOGIN_PAGE: &str = "login.html";

pub trait Page {
    /// Write `text` into the element identified by `element_id`.
    fn set_text(&mut self, element_id: &str, text: &str);

    /// Leave the dashboard for `url`.
    fn navigate(&mut self, url: &str);
}

pub fn welcome_message(username: &str) -> String {
    format!("Welcome back, {username}!")
}

/// Accuracy is an average score per quiz; the dashboard scales it by 10 and
/// shows one decimal place.
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.1}%", accuracy * 10.0)
}

pub fn format_streak(streak: u64) -> String {
    format!("{streak} days")
}

/// Copy the five profile fields into their slots on the page.
pub fn render_profile(page: &mut dyn Page, user: &UserProfile) {
    page.set_text(WELCOME_USER, &welcome_message(&user.username));
    page.set_text(XP_VALUE, &user.xp.to_string());
    page.set_text(QUIZ_COUNT, &user.quizzes_taken.to_string());
    page.set_text(ACCURACY_VALUE, &format_accuracy(user.accuracy));
    page.set_text(STREAK_VALUE, &format_streak(user.streak));
}

/// Renders dashboard writes as labelled lines on stdout.
#[derive(Debug, Default)]
pub struct TerminalPage;

impl Page for TerminalPage {
    fn set_text(&mut self, element_id: &str, text: &str) {
        match element_id {
            WELCOME_USER => println!("{text}"),
            XP_VALUE => println!("XP: {text}"),
            QUIZ_COUNT => println!("Quizzes taken: {text}"),
            ACCURACY_VALUE => println!("Accuracy: {text}"),
            STREAK_VALUE => println!("Streak: {text}"),
            other => println!("{other}: {text}"),
        }
    }

    fn navigate(&mut self, url: &str) {
        println!("You are not signed in (login page: {url}). Run `quizdash login` first.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_message_interpolates_username() {
        assert_eq!(welcome_message("alice"), "Welcome back, alice!");
    }

    #[test]
    fn accuracy_is_scaled_by_ten_with_one_decimal() {
        assert_eq!(format_accuracy(0.8), "8.0%");
        assert_eq!(format_accuracy(7.25), "72.5%");
        assert_eq!(format_accuracy(0.0), "0.0%");
    }

    #[test]
    fn streak_carries_a_days_suffix() {
        assert_eq!(format_streak(3), "3 days");
        assert_eq!(format_streak(0), "0 days");
    }
}
