//! Data structures for backend responses.
//!
//! The backend's JSON is loosely typed and differs between deployments. It is
//! normalized once, at the network boundary, into `CheckReport`; everything
//! downstream (cache, rendering, exit codes) works on the typed form.

mod checks;
mod health;
mod lenient;
mod report;
mod status;

pub use checks::{
    CheckTally, Checks, ContentCheck, DnsCheck, DnsRecords, DomainAge, IpQualityScoreCheck,
    RapidApiCheck, RapidApiVerdict, RiskBand, SafeBrowsingCheck, SslCheck, TelegramCheck,
    VirusTotalCheck, WhoisCheck,
};
pub use health::HealthStatus;
pub use report::{CheckReport, ResultSource};
pub use status::StatusClass;
