use lazy_static::lazy_static;
use metrics::{counter, histogram, Counter, Histogram};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub form_validator_creations: Counter,

    // The number of fields configured on a form validator
    pub number_of_fields_per_form: Histogram,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            form_validator_creations: counter!("form_validator.creations"),
            number_of_fields_per_form: histogram!("form_validator.num_fields"),
        }
    }
}
