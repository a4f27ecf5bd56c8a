//! Search over the vendor master for the lookup dialog.
//!
//! Filtering is a pure function of the records and the [`SearchCondition`];
//! nothing here mutates either.

use genba_portal::{VendorCategory, VendorRecord};

/// The six text-searchable vendor attributes, in dialog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    TransferBaseName,
    VendorKana,
    UserCode,
    BankName,
    AccountNo,
    AccountName,
}

impl SearchField {
    pub const ALL: [SearchField; 6] = [
        SearchField::TransferBaseName,
        SearchField::VendorKana,
        SearchField::UserCode,
        SearchField::BankName,
        SearchField::AccountNo,
        SearchField::AccountName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::TransferBaseName => "振込先名",
            Self::VendorKana => "カナ",
            Self::UserCode => "ユーザーコード",
            Self::BankName => "銀行名",
            Self::AccountNo => "口座番号",
            Self::AccountName => "口座名義",
        }
    }

    pub fn next(&self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// The record attribute this field searches.
    pub fn value_of<'a>(&self, record: &'a VendorRecord) -> &'a str {
        match self {
            Self::TransferBaseName => &record.transfer_base_name,
            Self::VendorKana => &record.vendor_kana,
            Self::UserCode => &record.user_code,
            Self::BankName => &record.bank_name,
            Self::AccountNo => &record.account_no,
            Self::AccountName => &record.account_name,
        }
    }
}

/// Transient dialog state: category gates, match mode and one text per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub include_payee: bool,
    pub include_purchase: bool,
    pub include_outsource: bool,
    pub partial_match: bool,
    pub transfer_base_name: String,
    pub vendor_kana: String,
    pub user_code: String,
    pub bank_name: String,
    pub account_no: String,
    pub account_name: String,
}

impl Default for SearchCondition {
    fn default() -> Self {
        Self {
            include_payee: true,
            include_purchase: true,
            include_outsource: true,
            partial_match: true,
            transfer_base_name: String::new(),
            vendor_kana: String::new(),
            user_code: String::new(),
            bank_name: String::new(),
            account_no: String::new(),
            account_name: String::new(),
        }
    }
}

impl SearchCondition {
    pub fn text(&self, field: SearchField) -> &str {
        match field {
            SearchField::TransferBaseName => &self.transfer_base_name,
            SearchField::VendorKana => &self.vendor_kana,
            SearchField::UserCode => &self.user_code,
            SearchField::BankName => &self.bank_name,
            SearchField::AccountNo => &self.account_no,
            SearchField::AccountName => &self.account_name,
        }
    }

    pub fn text_mut(&mut self, field: SearchField) -> &mut String {
        match field {
            SearchField::TransferBaseName => &mut self.transfer_base_name,
            SearchField::VendorKana => &mut self.vendor_kana,
            SearchField::UserCode => &mut self.user_code,
            SearchField::BankName => &mut self.bank_name,
            SearchField::AccountNo => &mut self.account_no,
            SearchField::AccountName => &mut self.account_name,
        }
    }

    pub fn includes(&self, category: VendorCategory) -> bool {
        match category {
            VendorCategory::Payee => self.include_payee,
            VendorCategory::Purchase => self.include_purchase,
            VendorCategory::Outsource => self.include_outsource,
        }
    }

    pub fn toggle(&mut self, category: VendorCategory) {
        match category {
            VendorCategory::Payee => self.include_payee = !self.include_payee,
            VendorCategory::Purchase => self.include_purchase = !self.include_purchase,
            VendorCategory::Outsource => self.include_outsource = !self.include_outsource,
        }
    }

    fn any_category_flag(&self) -> bool {
        self.include_payee || self.include_purchase || self.include_outsource
    }

    /// Category gate. With every flag off the gate is open, not closed.
    pub fn passes_category(&self, record: &VendorRecord) -> bool {
        if self.any_category_flag() {
            self.includes(record.category)
        } else {
            true
        }
    }

    fn field_matches(&self, field: SearchField, record: &VendorRecord) -> bool {
        let query = self.text(field);
        if query.is_empty() {
            return true;
        }

        let value = field.value_of(record);
        if self.partial_match {
            value.to_lowercase().contains(&query.to_lowercase())
        } else {
            value == query
        }
    }

    pub fn matches(&self, record: &VendorRecord) -> bool {
        let category = self.passes_category(record);
        let fields = SearchField::ALL
            .iter()
            .fold(true, |acc, field| acc & self.field_matches(*field, record));
        category && fields
    }
}

/// Records passing `condition`, in input order.
pub fn filter<'a>(records: &'a [VendorRecord], condition: &SearchCondition) -> Vec<&'a VendorRecord> {
    records.iter().filter(|r| condition.matches(r)).collect()
}

/// Row-activation lookup. Out of range is `None`, never a panic.
pub fn select<'a>(filtered: &[&'a VendorRecord], index: usize) -> Option<&'a VendorRecord> {
    filtered.get(index).copied()
}

/// Confirm-button lookup; same bounds as [`select`].
pub fn confirm<'a>(filtered: &[&'a VendorRecord], index: usize) -> Option<&'a VendorRecord> {
    select(filtered, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genba_portal::common::{sample_vendors, PaymentTerms};

    fn record(code: &str, category: VendorCategory, bank_name: &str) -> VendorRecord {
        VendorRecord {
            vendor_code: code.to_string(),
            vendor_name: format!("vendor {code}"),
            transfer_base_name: format!("Transfer {code}"),
            vendor_kana: String::new(),
            user_code: format!("U-{code}"),
            bank_name: bank_name.to_string(),
            account_no: String::new(),
            account_name: String::new(),
            zip: String::new(),
            address: String::new(),
            address2: String::new(),
            tel: String::new(),
            fax: String::new(),
            business_reg_no: String::new(),
            category,
            cancel_type: String::new(),
            terms: PaymentTerms::default(),
        }
    }

    fn codes(records: &[&VendorRecord]) -> Vec<String> {
        records.iter().map(|r| r.vendor_code.clone()).collect()
    }

    #[test]
    fn purchase_only_with_partial_bank_name() {
        let records = vec![
            record("1", VendorCategory::Purchase, "みずほ銀行"),
            record("2", VendorCategory::Payee, "みずほ銀行"),
        ];
        let condition = SearchCondition {
            include_payee: false,
            include_purchase: true,
            include_outsource: false,
            partial_match: true,
            bank_name: "みずほ".to_string(),
            ..SearchCondition::default()
        };

        assert_eq!(codes(&filter(&records, &condition)), vec!["1"]);
    }

    #[test]
    fn all_category_flags_off_bypasses_gate() {
        let records = sample_vendors();
        let mut bypass = SearchCondition::default();
        bypass.include_payee = false;
        bypass.include_purchase = false;
        bypass.include_outsource = false;

        assert_eq!(filter(&records, &bypass).len(), records.len());

        bypass.bank_name = "りそな".to_string();
        let mut all_on = bypass.clone();
        all_on.include_payee = true;
        all_on.include_purchase = true;
        all_on.include_outsource = true;
        assert_eq!(
            codes(&filter(&records, &bypass)),
            codes(&filter(&records, &all_on))
        );
    }

    #[test]
    fn default_condition_is_identity_in_order() {
        let records = vec![
            record("3", VendorCategory::Outsource, "a"),
            record("1", VendorCategory::Purchase, "b"),
            record("2", VendorCategory::Payee, "c"),
        ];
        assert_eq!(
            codes(&filter(&records, &SearchCondition::default())),
            vec!["3", "1", "2"]
        );
    }

    #[test]
    fn partial_match_ignores_case_of_query() {
        let records = vec![
            record("1", VendorCategory::Payee, "Mizuho Bank"),
            record("2", VendorCategory::Payee, "Resona"),
        ];
        for query in ["mizuho", "MIZUHO", "MiZuHo", "bank"] {
            let condition = SearchCondition {
                bank_name: query.to_string(),
                ..SearchCondition::default()
            };
            assert_eq!(codes(&filter(&records, &condition)), vec!["1"], "{query}");
        }
    }

    #[test]
    fn exact_match_is_case_sensitive_and_untrimmed() {
        let records = vec![record("1", VendorCategory::Payee, "Mizuho")];
        let exact = |bank: &str| SearchCondition {
            partial_match: false,
            bank_name: bank.to_string(),
            ..SearchCondition::default()
        };

        assert_eq!(filter(&records, &exact("Mizuho")).len(), 1);
        assert!(filter(&records, &exact("mizuho")).is_empty());
        assert!(filter(&records, &exact("Mizuho ")).is_empty());
        assert!(filter(&records, &exact("Mizu")).is_empty());
    }

    #[test]
    fn every_field_predicate_must_pass() {
        let records = vec![record("1", VendorCategory::Payee, "みずほ銀行")];
        let condition = SearchCondition {
            bank_name: "みずほ".to_string(),
            user_code: "U-2".to_string(),
            ..SearchCondition::default()
        };
        assert!(filter(&records, &condition).is_empty());
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let records = sample_vendors();
        let condition = SearchCondition {
            include_outsource: false,
            account_name: "カ".to_string(),
            ..SearchCondition::default()
        };
        let first = codes(&filter(&records, &condition));
        let second = codes(&filter(&records, &condition));
        assert_eq!(first, second);
    }

    #[test]
    fn select_and_confirm_are_bounds_checked() {
        let records = sample_vendors();
        let filtered = filter(&records, &SearchCondition::default());

        assert_eq!(
            select(&filtered, 1).map(|r| r.vendor_code.as_str()),
            Some("402920000")
        );
        assert_eq!(select(&filtered, 3), None);
        assert_eq!(confirm(&filtered, 3), None);
        assert_eq!(confirm(&[], 0), None);
    }

    #[test]
    fn field_focus_cycles() {
        assert_eq!(SearchField::AccountName.next(), SearchField::TransferBaseName);
        assert_eq!(SearchField::TransferBaseName.previous(), SearchField::AccountName);
    }
}
