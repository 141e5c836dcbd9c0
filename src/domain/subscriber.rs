use super::{
    subscription_date::{parse_end_date, parse_start_date},
    Amount, RecordError,
};
use serde::Deserialize;
use time::Date;

/// One export row exactly as read, before any coercion.
///
/// Empty or missing amount and date cells come through as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubscriber {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub total_money: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub level_name: String,
}

/// A normalized subscriber record. Built once from a [`RawSubscriber`] and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    name: String,
    email: String,
    kind: String,
    price: Amount,
    total_money: Amount,
    start_date: Date,
    end_date: Option<Date>,
    level_name: String,
}

impl Subscriber {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Free-form subscription type, e.g. `following` or `subscription`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn price(&self) -> Amount {
        self.price
    }

    pub fn total_money(&self) -> Amount {
        self.total_money
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    /// A subscriber is active while the subscription has no end date and
    /// costs something.
    pub fn is_active(&self) -> bool {
        self.end_date.is_none() && self.price.is_positive()
    }
}

impl TryFrom<RawSubscriber> for Subscriber {
    type Error = RecordError;

    fn try_from(raw: RawSubscriber) -> Result<Self, Self::Error> {
        let start_date = parse_start_date(raw.start_date.as_deref())?;
        let end_date = parse_end_date(raw.end_date.as_deref())?;
        let price = Amount::parse("price", raw.price.as_deref().unwrap_or_default())?;
        let total_money =
            Amount::parse("total_money", raw.total_money.as_deref().unwrap_or_default())?;

        Ok(Self {
            name: raw.name,
            email: raw.email,
            kind: raw.kind,
            price,
            total_money,
            start_date,
            end_date,
            level_name: raw.level_name,
        })
    }
}
