use serde::{Deserialize, Serialize};

/// Closed set of counterparty categories, serialized with their ledger labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    #[serde(rename = "支払先")]
    Payee,
    #[serde(rename = "仕入先")]
    Purchase,
    #[serde(rename = "外注先")]
    Outsource,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 3] = [
        VendorCategory::Payee,
        VendorCategory::Purchase,
        VendorCategory::Outsource,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Payee => "支払先",
            Self::Purchase => "仕入先",
            Self::Outsource => "外注先",
        }
    }
}

impl std::fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Receipt and payment terms attached to a vendor master row
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentTerms {
    pub payment_type: String,
    pub payment_bill_rate: String,
    pub payment_bill_site: String,
    pub pay_date: String,
    pub pay_type: String,
    pub pay_bill_rate: String,
    pub pay_bill_site: String,
}

/// One vendor/payee master entry. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub vendor_code: String,
    pub vendor_name: String,
    #[serde(default)]
    pub transfer_base_name: String,
    #[serde(default)]
    pub vendor_kana: String,
    #[serde(default)]
    pub user_code: String,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub account_no: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub business_reg_no: String,
    #[serde(rename = "vendorType")]
    pub category: VendorCategory,
    #[serde(default)]
    pub cancel_type: String,
    #[serde(flatten)]
    pub terms: PaymentTerms,
}

// GET /vendors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorsResponse {
    #[serde(default)]
    pub vendors: Vec<VendorRecord>,
}

/// Built-in master used when no vendor file is configured.
pub fn sample_vendors() -> Vec<VendorRecord> {
    vec![
        VendorRecord {
            vendor_code: "402910000".to_string(),
            vendor_name: "株式会社ユーザーローカル　本社".to_string(),
            transfer_base_name: "株式会社ユーザーローカル".to_string(),
            vendor_kana: "ユーザーローカル".to_string(),
            user_code: "A-001".to_string(),
            bank_name: "みずほ銀行".to_string(),
            account_no: "6800175".to_string(),
            account_name: "カブシキガイシャユーザーローカル".to_string(),
            zip: "108-0023".to_string(),
            address: "東京都港区芝浦3-1-21".to_string(),
            address2: "msb Tamachi 田町ステーションタワーS 14F".to_string(),
            tel: "03-6435-2115".to_string(),
            fax: String::new(),
            business_reg_no: "T9011001069346".to_string(),
            category: VendorCategory::Purchase,
            cancel_type: String::new(),
            terms: PaymentTerms {
                payment_type: String::new(),
                payment_bill_rate: "0".to_string(),
                payment_bill_site: String::new(),
                pay_date: "99".to_string(),
                pay_type: "手形".to_string(),
                pay_bill_rate: "100".to_string(),
                pay_bill_site: "60".to_string(),
            },
        },
        VendorRecord {
            vendor_code: "402920000".to_string(),
            vendor_name: "川崎設備工業株式会社".to_string(),
            transfer_base_name: "川崎設備工業（株）".to_string(),
            vendor_kana: "カワサキセツビコウギョウ".to_string(),
            user_code: "K-001".to_string(),
            bank_name: "三井住友銀行".to_string(),
            account_no: "1234567".to_string(),
            account_name: "カワサキセツビコウギョウ".to_string(),
            zip: "210-0001".to_string(),
            address: "神奈川県川崎市川崎区本町1-1-1".to_string(),
            address2: String::new(),
            tel: "044-123-4567".to_string(),
            fax: "044-123-4568".to_string(),
            business_reg_no: "T1234567890123".to_string(),
            category: VendorCategory::Payee,
            cancel_type: String::new(),
            terms: PaymentTerms {
                payment_type: "現金".to_string(),
                payment_bill_rate: "100".to_string(),
                payment_bill_site: String::new(),
                pay_date: "20".to_string(),
                pay_type: "現金".to_string(),
                pay_bill_rate: "100".to_string(),
                pay_bill_site: String::new(),
            },
        },
        VendorRecord {
            vendor_code: "402930000".to_string(),
            vendor_name: "東京建設資材株式会社".to_string(),
            transfer_base_name: "東京建設資材（株）".to_string(),
            vendor_kana: "トウキョウケンセツシザイ".to_string(),
            user_code: "T-001".to_string(),
            bank_name: "りそな銀行".to_string(),
            account_no: "9876543".to_string(),
            account_name: "トウキョウケンセツシザイ".to_string(),
            zip: "100-0001".to_string(),
            address: "東京都千代田区千代田1-1".to_string(),
            address2: "千代田ビル 5F".to_string(),
            tel: "03-1234-5678".to_string(),
            fax: "03-1234-5679".to_string(),
            business_reg_no: "T2345678901234".to_string(),
            category: VendorCategory::Outsource,
            cancel_type: String::new(),
            terms: PaymentTerms {
                payment_type: "現金".to_string(),
                payment_bill_rate: "100".to_string(),
                payment_bill_site: String::new(),
                pay_date: "末日".to_string(),
                pay_type: "現金".to_string(),
                pay_bill_rate: "100".to_string(),
                pay_bill_site: String::new(),
            },
        },
    ]
}
