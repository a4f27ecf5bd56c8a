pub mod reducer;
pub mod suggestions;
pub mod vendor_filter;

use std::time::Duration;

use genba_portal::VendorRecord;
use throbber_widgets_tui::ThrobberState;

use crate::ui::screens::Screen;
use suggestions::SuggestionSession;
use vendor_filter::{SearchCondition, SearchField};

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Fields of the payment slip, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlipField {
    #[default]
    Payee,
    Summary,
    AccountTitle,
    Amount,
}

impl SlipField {
    pub const ALL: [SlipField; 4] = [
        SlipField::Payee,
        SlipField::Summary,
        SlipField::AccountTitle,
        SlipField::Amount,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Payee => "支払先",
            Self::Summary => "摘要",
            Self::AccountTitle => "勘定科目",
            Self::Amount => "金額",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Payee => Self::Summary,
            Self::Summary => Self::AccountTitle,
            Self::AccountTitle => Self::Amount,
            Self::Amount => Self::Payee,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Payee => Self::Amount,
            Self::Summary => Self::Payee,
            Self::AccountTitle => Self::Summary,
            Self::Amount => Self::AccountTitle,
        }
    }
}

/// Open vendor lookup dialog
///
/// The result list is not stored; it is recomputed from `condition` over the
/// loaded master on demand.
#[derive(Debug, Clone, Default)]
pub struct VendorLookupState {
    pub condition: SearchCondition,
    pub focused_field: SearchField,
    /// Index into the filtered rows
    pub highlighted: usize,
}

impl VendorLookupState {
    pub fn filtered<'a>(&self, vendors: &'a [VendorRecord]) -> Vec<&'a VendorRecord> {
        vendor_filter::filter(vendors, &self.condition)
    }

    /// Keep the highlight inside a list that may have shrunk.
    pub fn clamp_highlight(&mut self, len: usize) {
        self.highlighted = self.highlighted.min(len.saturating_sub(1));
    }
}

/// The payment slip being entered, with its dropdown and lookup dialog.
#[derive(Debug)]
pub struct SlipState {
    pub current_field: SlipField,
    /// Only ever set from the vendor master, never typed
    pub payee: Option<VendorRecord>,
    pub summary: String,
    pub account_title: String,
    /// Digits only
    pub amount: String,

    // Account-title suggestions for the summary
    pub suggestions: SuggestionSession,
    pub suggestion_index: usize,
    /// Set by Esc or an accepted suggestion; cleared by a summary edit or fresh results
    pub dropdown_dismissed: bool,
    pub suggestion_throbber: ThrobberState,

    /// Open vendor lookup dialog, modal over the slip
    pub lookup: Option<VendorLookupState>,
}

impl SlipState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            current_field: SlipField::default(),
            payee: None,
            summary: String::new(),
            account_title: String::new(),
            amount: String::new(),
            suggestions: SuggestionSession::new(debounce),
            suggestion_index: 0,
            dropdown_dismissed: false,
            suggestion_throbber: ThrobberState::default(),
            lookup: None,
        }
    }

    /// The dropdown shows under the account title while the summary or the
    /// account title is being edited.
    pub fn is_dropdown_visible(&self) -> bool {
        matches!(
            self.current_field,
            SlipField::Summary | SlipField::AccountTitle
        ) && !self.dropdown_dismissed
            && !self.suggestions.suggestions.is_empty()
    }

    pub fn field_text(&self, field: SlipField) -> &str {
        match field {
            SlipField::Payee => self
                .payee
                .as_ref()
                .map(|p| p.vendor_name.as_str())
                .unwrap_or(""),
            SlipField::Summary => &self.summary,
            SlipField::AccountTitle => &self.account_title,
            SlipField::Amount => &self.amount,
        }
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub slip: SlipState,

    // Vendor master
    pub vendors: Vec<VendorRecord>,
    pub vendors_loading: LoadingState,

    // UI state
    pub help_visible: bool,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            screen: Screen::Slip,
            slip: SlipState::new(debounce),
            vendors: Vec::new(),
            vendors_loading: LoadingState::NotStarted,
            help_visible: false,
            should_quit: false,
        }
    }

    pub fn current_screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!("Navigating to {:?}", std::mem::discriminant(&screen));
        self.screen = screen;
    }

    /// Returns true if navigation happened, false if already on the slip
    pub fn navigate_back(&mut self) -> bool {
        match self.screen {
            Screen::Slip => false,
            _ => {
                self.screen = Screen::Slip;
                true
            }
        }
    }

    /// The throbber to advance on each tick: the vendor load first, then a
    /// suggestion request in flight.
    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        if let LoadingState::Loading(ref mut throbber_state) = self.vendors_loading {
            return Some(throbber_state);
        }
        if self.slip.suggestions.loading {
            return Some(&mut self.slip.suggestion_throbber);
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(suggestions::DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slip_fields_cycle_both_ways() {
        for field in SlipField::ALL {
            assert_eq!(field.next().previous(), field);
        }
        assert_eq!(SlipField::Amount.next(), SlipField::Payee);
    }

    #[test]
    fn highlight_clamps_to_shrunk_list() {
        let mut lookup = VendorLookupState {
            highlighted: 5,
            ..VendorLookupState::default()
        };
        lookup.clamp_highlight(2);
        assert_eq!(lookup.highlighted, 1);
        lookup.clamp_highlight(0);
        assert_eq!(lookup.highlighted, 0);
    }

    #[test]
    fn navigate_back_from_slip_is_a_no_op() {
        let mut state = AppState::default();
        assert!(!state.navigate_back());
        state.navigate_to(Screen::Logs(LogsState::default()));
        assert!(state.navigate_back());
        assert!(matches!(state.current_screen(), Screen::Slip));
    }
}
