//! ISO 4217 currency codes.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Currency of a valuation, identified by its ISO 4217 code.
///
/// Covers the active codes, the fund, metal and special codes of the
/// `X..` and `..V` ranges, and withdrawn codes that still occur in archived
/// valuation reports: the national currencies replaced by the euro in every
/// accession wave, and the older codes superseded by a redenomination.
#[allow(missing_docs, clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    VariantArray,
)]
#[rustfmt::skip]
pub enum Currency {
    AED, AFN, ALL, AMD, ANG, AOA, ARS, AUD, AWG, AZN,
    BAM, BBD, BDT, BGN, BHD, BIF, BMD, BND, BOB, BRL, BSD, BTN, BWP, BYN, BZD,
    CAD, CDF, CHF, CLP, CNY, COP, CRC, CUP, CVE, CZK,
    DJF, DKK, DOP, DZD,
    EGP, ERN, ETB, EUR,
    FJD, FKP,
    GBP, GEL, GHS, GIP, GMD, GNF, GTQ, GYD,
    HKD, HNL, HTG, HUF,
    IDR, ILS, INR, IQD, IRR, ISK,
    JMD, JOD, JPY,
    KES, KGS, KHR, KMF, KPW, KRW, KWD, KYD, KZT,
    LAK, LBP, LKR, LRD, LSL, LYD,
    MAD, MDL, MGA, MKD, MMK, MNT, MOP, MRU, MUR, MVR, MWK, MXN, MYR, MZN,
    NAD, NGN, NIO, NOK, NPR, NZD,
    OMR,
    PAB, PEN, PGK, PHP, PKR, PLN, PYG,
    QAR,
    RON, RSD, RUB, RWF,
    SAR, SBD, SCR, SDG, SEK, SGD, SHP, SLE, SOS, SRD, SSP, STN, SVC, SYP, SZL,
    THB, TJS, TMT, TND, TOP, TRY, TTD, TWD, TZS,
    UAH, UGX, USD, UYU, UZS,
    VES, VND, VUV,
    WST,
    XAF, XCD, XOF, XPF,
    YER,
    ZAR, ZMW, ZWL,
    // Funds, precious metals, special and testing codes
    BOV, CHE, CHW, CLF, COU, MXV, USN, UYI, UYW,
    XAG, XAU, XBA, XBB, XBC, XBD, XDR, XPD, XPT, XSU, XTS, XUA, XXX,
    // Replaced by EUR
    ATS, BEF, CYP, DEM, EEK, ESP, FIM, FRF, GRD, HRK, IEP, ITL, LTL, LUF, LVL,
    MTL, NLG, PTE, SIT, SKK,
    // Withdrawn
    ADP, AFA, AYM, AZM, BGL, BYB, BYR, CSD, CUC, GHC, GWP, MGF, MRO, MZM, ROL,
    RUR, SDD, SLL, SRG, STD, TMM, TPE, TRL, USS, VEB, VED, VEF, XFO, XFU, YUM,
    ZMK, ZWD, ZWG, ZWN, ZWR,
}

impl Currency {
    /// The three-letter code
    pub fn code(&self) -> &str {
        self.as_ref()
    }
}
