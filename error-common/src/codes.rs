// Error codes implementation
// This module contains standardized error codes for CareDesk Engine

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const AMOUNT_NOT_POSITIVE: &str = "VALIDATION_1003";
    pub const DISCOUNT_OUT_OF_RANGE: &str = "VALIDATION_1004";
}

pub mod lifecycle {
    pub const ADMISSION_DISCHARGED: &str = "LIFECYCLE_2001";
    pub const ALREADY_DISCHARGED: &str = "LIFECYCLE_2002";
}

pub mod store {
    pub const PATH_NOT_FOUND: &str = "STORE_3001";
    pub const WRITE_FAILED: &str = "STORE_3002";
    pub const SUBSCRIPTION_LAGGED: &str = "STORE_3003";
}

pub mod layout {
    pub const INVALID_PAGE_FORMAT: &str = "LAYOUT_4001";
    pub const RENDER_FAILED: &str = "LAYOUT_4002";
}
