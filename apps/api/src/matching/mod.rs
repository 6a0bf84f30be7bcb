//! Resume ↔ job description matching.
//! Pure lexical overlap on filtered lemmas; HTTP glue lives in `handlers`.

pub mod handlers;
pub mod matcher;
pub mod report;
