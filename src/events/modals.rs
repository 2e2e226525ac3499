//! Key handling while a modal is open.

use std::num::IntErrorKind;

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::selection::bulk_select_first;
use crate::state::{AppState, Modal};

/// Longest input the bulk popover accepts; longer counts saturate anyway.
const MAX_INPUT_LEN: usize = 19;

/// What: Route a key press to the active modal.
///
/// Output:
/// - `true` when a modal was open and consumed the key.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match &mut app.modal {
        Modal::None => false,
        Modal::Alert { .. } | Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?' | 'q')) {
                app.modal = Modal::None;
            }
            true
        }
        Modal::BulkSelect { input } => {
            match ke.code {
                KeyCode::Esc => app.modal = Modal::None,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() && input.len() < MAX_INPUT_LEN => {
                    input.push(c);
                }
                KeyCode::Char('-') if input.is_empty() => input.push('-'),
                KeyCode::Enter => submit_bulk(app),
                _ => {}
            }
            true
        }
    }
}

/// What: Apply the bulk popover's value and close it.
///
/// Details:
/// - Empty input or a lone `-` closes the popover without touching the selection.
/// - Counts beyond `i64` saturate, so a huge number still selects the whole page.
fn submit_bulk(app: &mut AppState) {
    let Modal::BulkSelect { input } = std::mem::take(&mut app.modal) else {
        return;
    };
    match parse_count(&input) {
        Some(n) => bulk_select_first(app, n),
        None => tracing::debug!(input = %input, "bulk select input ignored"),
    }
}

/// What: Parse the typed count, saturating on overflow.
///
/// Output:
/// - `None` only when there are no digits at all.
fn parse_count(input: &str) -> Option<i64> {
    match input.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
