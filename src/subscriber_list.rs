use crate::{
    domain::{Amount, Subscriber},
    report::{HtmlReport, PriceGroup, ReportFormat, TextReport},
};
use std::collections::BTreeMap;

/// All subscribers from one export, with the active subset and the distinct
/// active prices derived once at construction.
#[derive(Debug, Clone)]
pub struct SubscriberList {
    records: Vec<Subscriber>,
    active: Vec<usize>,
    prices: Vec<Amount>,
}

impl SubscriberList {
    pub fn new(records: Vec<Subscriber>) -> Self {
        let active: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, subscriber)| subscriber.is_active())
            .map(|(index, _)| index)
            .collect();

        let mut prices: Vec<Amount> = active.iter().map(|&i| records[i].price()).collect();
        prices.sort();
        prices.dedup();

        Self {
            records,
            active,
            prices,
        }
    }

    /// Records in export order.
    pub fn records(&self) -> &[Subscriber] {
        &self.records
    }

    /// Active records in export order.
    pub fn active_records(&self) -> impl Iterator<Item = &Subscriber> + '_ {
        self.active.iter().map(|&i| &self.records[i])
    }

    /// Distinct prices paid by active subscribers, ascending.
    pub fn distinct_active_prices(&self) -> &[Amount] {
        &self.prices
    }

    /// Active subscribers paying `price`, biggest total payers first.
    ///
    /// Subscribers with the same total keep their export order. Unknown
    /// prices yield an empty list.
    pub fn select_by_price(&self, price: f64) -> Vec<&Subscriber> {
        if !self.prices.iter().any(|p| *p == price) {
            return Vec::new();
        }

        let mut selected: Vec<&Subscriber> = self
            .active_records()
            .filter(|subscriber| subscriber.price() == price)
            .collect();
        selected.sort_by(|a, b| b.total_money().cmp(&a.total_money()));
        selected
    }

    pub fn group_by_price(&self, price: f64) -> BTreeMap<Amount, Vec<&Subscriber>> {
        self.prices
            .iter()
            .find(|p| **p == price)
            .map(|&p| BTreeMap::from([(p, self.select_by_price(price))]))
            .unwrap_or_default()
    }

    pub fn render_text(&self, sort_descending: bool) -> String {
        TextReport::new(self.price_groups(sort_descending)).to_string()
    }

    pub fn render_html(&self, sort_descending: bool) -> String {
        HtmlReport::new(self.price_groups(sort_descending)).to_string()
    }

    pub fn render(&self, format: ReportFormat, sort_descending: bool) -> String {
        match format {
            ReportFormat::Text => self.render_text(sort_descending),
            ReportFormat::Html => self.render_html(sort_descending),
        }
    }

    pub fn print_report(&self, sort_descending: bool) {
        println!("{}", self.render_text(sort_descending));
    }

    fn price_groups(&self, sort_descending: bool) -> Vec<PriceGroup<'_>> {
        let groups = self.prices.iter().map(|&price| PriceGroup {
            price,
            subscribers: self.select_by_price(price.value()),
        });

        if sort_descending {
            groups.rev().collect()
        } else {
            groups.collect()
        }
    }
}
