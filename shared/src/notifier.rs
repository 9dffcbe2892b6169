use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::events::WheelEvents;
use crate::prize_table::Prize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultIcon {
    Trophy,
    BrokenHeart,
}

/// What the result modal shows for a prize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ResultIcon,
    pub prize_label: &'static str,
}

pub fn result_summary(prize: &Prize) -> ResultSummary {
    if prize.is_win() {
        ResultSummary {
            title: WIN_TITLE,
            description: WIN_DESCRIPTION,
            icon: ResultIcon::Trophy,
            prize_label: prize.label,
        }
    } else {
        ResultSummary {
            title: MISS_TITLE,
            description: MISS_DESCRIPTION,
            icon: ResultIcon::BrokenHeart,
            prize_label: prize.label,
        }
    }
}

pub fn win_message(prize: &Prize) -> String {
    format!("Congratulations! You won {}!", prize.label)
}

/// Hands a resolved prize to the renderer: the finished event, celebration for
/// a win and the matching toast.
pub fn announce_result<E: WheelEvents + ?Sized>(prize: &Prize, new_balance: f64, events: &mut E) {
    events.on_spin_finished(prize, new_balance);
    if prize.is_win() {
        events.on_celebrate();
        events.on_toast(&Toast::new(win_message(prize), ToastKind::Success));
    } else {
        events.on_toast(&Toast::new(NO_WIN_MESSAGE, ToastKind::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventLog, WheelEvent};
    use crate::prize_table::PRIZE_TABLE;

    #[test]
    fn test_winning_prize_celebrates() {
        let mut log = EventLog::new();
        announce_result(&PRIZE_TABLE[2], 50.0, &mut log);

        assert_eq!(
            log.events(),
            &[
                WheelEvent::SpinFinished { prize: PRIZE_TABLE[2], new_balance: 50.0 },
                WheelEvent::Celebrate,
                WheelEvent::Toast(Toast::new("Congratulations! You won R$ 50,00!", ToastKind::Success)),
            ]
        );
    }

    #[test]
    fn test_miss_does_not_celebrate() {
        let mut log = EventLog::new();
        announce_result(&PRIZE_TABLE[0], 0.0, &mut log);

        assert!(!log.contains(&WheelEvent::Celebrate));
        assert!(log.contains(&WheelEvent::Toast(Toast::new(NO_WIN_MESSAGE, ToastKind::Warning))));
    }

    #[test]
    fn test_result_summary() {
        let win = result_summary(&PRIZE_TABLE[3]);
        assert_eq!(win.icon, ResultIcon::Trophy);
        assert_eq!(win.title, WIN_TITLE);
        assert_eq!(win.prize_label, "R$ 75,00");

        let miss = result_summary(&PRIZE_TABLE[0]);
        assert_eq!(miss.icon, ResultIcon::BrokenHeart);
        assert_eq!(miss.description, MISS_DESCRIPTION);
    }
}
