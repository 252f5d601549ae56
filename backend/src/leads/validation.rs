// src/leads/validation.rs

use crate::leads::models::QuoteFields;

/// Minimum trimmed length per required field, with the message shown when a
/// value falls short. Order here is the order messages are reported in.
const RULES: [(Field, usize, &str); 5] = [
    (Field::Name, 2, "Please enter your name."),
    (Field::Phone, 6, "Please enter a valid phone number."),
    (Field::Suburb, 2, "Please enter your suburb."),
    (Field::Service, 2, "Please choose a service."),
    (Field::Message, 5, "Please add a little more detail about the job."),
];

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Phone,
    Suburb,
    Service,
    Message,
}

impl Field {
    fn value<'a>(&self, fields: &'a QuoteFields) -> &'a str {
        match self {
            Field::Name => &fields.name,
            Field::Phone => &fields.phone,
            Field::Suburb => &fields.suburb,
            Field::Service => &fields.service,
            Field::Message => &fields.message,
        }
    }
}

/// Check every required field and return all violations, not just the first.
/// Email is never checked.
pub fn validate(fields: &QuoteFields) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|(field, min, _)| field.value(fields).chars().count() < *min)
        .map(|(_, _, message)| *message)
        .collect()
}
