use genba_portal::{VendorCategory, VendorRecord};

use crate::state::suggestions::{RequestId, SuggestionOutcome, TimerId};
use crate::state::vendor_filter::SearchField;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Slip form
    NavigateSlipField {
        forward: bool,
    },
    AppendSlipChar {
        c: char,
    },
    DeleteSlipChar,
    ClearSlipField,

    // Suggestion dropdown
    SelectSuggestion {
        up: bool,
    },
    AcceptSuggestion,
    DismissSuggestions,
    IssueSuggestionRequest {
        timer: TimerId,
    },

    // Vendor master
    LoadVendors,
    OpenVendorLookup,
    CloseVendorLookup,
    ToggleVendorCategory(VendorCategory),
    TogglePartialMatch,
    FocusLookupField(SearchField),
    NavigateLookupField {
        forward: bool,
    },
    AppendLookupChar(char),
    DeleteLookupChar,
    ClearLookupField,
    HighlightVendor {
        up: bool,
    },
    ActivateVendorRow,
    ConfirmVendor,

    // Navigation
    NavigateBack,
    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    VendorsLoaded {
        vendors: Vec<VendorRecord>,
    },
    VendorsLoadFailed {
        error: String,
    },

    SuggestionTimerFired {
        timer: TimerId,
    },
    SuggestionsSettled {
        request: RequestId,
        outcome: SuggestionOutcome,
    },
}
