pub const YES: &str = "Yes";
pub const NO: &str = "No";

// Environmental
pub const RENEWABLE_INVESTED: &str = "renewable_invested";
pub const ASSET_TYPES: &str = "asset_types";
pub const RENEWABLE_AMOUNT: &str = "renewable_amount";
pub const VAT_EXEMPT: &str = "vat_exempt";
pub const RENEWABLE_INVOICE: &str = "renewable_invoice";
pub const PLASTIC_USE: &str = "plastic_use";
pub const PLASTIC_AMOUNT: &str = "plastic_amount";
pub const EXCISE_CODE: &str = "excise_code";
pub const PLASTIC_REPORT: &str = "plastic_report";

// Social
pub const DISABILITY_EMPLOYEES: &str = "disability_employees";
pub const NCPD_CERTIFICATES: &str = "ncpd_certificates";
pub const TRAINING_SPEND: &str = "training_spend";
pub const TRAINING_CERTIFIED: &str = "training_certified";
pub const TRAINING_RECEIPTS: &str = "training_receipts";

// Governance
pub const TTC_UPLOAD: &str = "ttc_upload";
pub const TTC_INCOME_TAX: &str = "ttc_income_tax";
pub const TTC_PAYE: &str = "ttc_paye";
pub const TTC_VAT: &str = "ttc_vat";
pub const TTC_WITHHOLDING: &str = "ttc_withholding";
pub const TTC_EXCISE: &str = "ttc_excise";
pub const TTC_NSSF: &str = "ttc_nssf";

pub const ASSET_OPTIONS: [&str; 4] = ["Solar", "Wind", "Hydro", "Biomass"];
pub const CERTIFIER_OPTIONS: [&str; 3] = ["None", "NITA-U", "Ministry of Education"];
pub const DOCUMENT_TYPES: [&str; 3] = ["pdf", "jpg", "png"];
pub const TTC_FORM_TYPES: [&str; 3] = ["pdf", "xls", "xlsx"];

pub const DEFAULT_CURRENCY: &str = "UGX";

pub const CONFIRMATION_REQUIRED: &str =
    "Please confirm that your information is accurate before submitting.";
pub const RENEWABLE_AMOUNT_REQUIRED: &str =
    "Renewable energy investment amount must be greater than zero.";
pub const PLASTIC_AMOUNT_REQUIRED: &str = "Plastic material amount must be greater than zero.";
pub const ZERO_DISABILITY_EMPLOYEES: &str = "You have indicated zero employees with disabilities.";
pub const ZERO_TRAINING_SPEND: &str = "You have indicated zero training expenditure.";
