//! Bank SWIFT codes accepted by the Billplz bank verification service.
//!
//! Extracted from <https://www.billplz.com/api#create-a-bank-account>.

pub const BANK_CODE_AFFIN_BANK: &str = "PHBMMYKL";
pub const BANK_CODE_AGROBANK: &str = "BPMBMYKL";
pub const BANK_CODE_ALLIANCE_BANK: &str = "MFBBMYKL";
pub const BANK_CODE_AL_RAJHI_BANK: &str = "RJHIMYKL";
pub const BANK_CODE_AMBANK: &str = "ARBKMYKL";
pub const BANK_CODE_BANK_ISLAM: &str = "BIMBMYKL";
pub const BANK_CODE_BANK_KERJASAMA_RAKYAT: &str = "BKRMMYKL";
pub const BANK_CODE_BANK_MUAMALAT: &str = "BMMBMYKL";
pub const BANK_CODE_BANK_SIMPANAN_NASIONAL: &str = "BSNAMYK1";
pub const BANK_CODE_CIMB_BANK: &str = "CIBBMYKL";
pub const BANK_CODE_CITIBANK: &str = "CITIMYKL";
pub const BANK_CODE_HONG_LEONG_BANK: &str = "HLBBMYKL";
pub const BANK_CODE_HSBC_BANK: &str = "HBMBMYKL";
pub const BANK_CODE_MAYBANK: &str = "MBBEMYKL";
pub const BANK_CODE_OCBC_BANK: &str = "OCBCMYKL";
pub const BANK_CODE_PUBLIC_BANK: &str = "PBBEMYKL";
pub const BANK_CODE_RHB_BANK: &str = "RHBBMYKL";
pub const BANK_CODE_STANDARD_CHARTERED_BANK: &str = "SCBLMYKX";
pub const BANK_CODE_UNITED_OVERSEAS_BANK: &str = "UOVBMYKL";
