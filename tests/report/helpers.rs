use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use once_cell::sync::Lazy;
use std::io::Write;
use subscriber_report::{
    source::CsvSource,
    subscriber_list::SubscriberList,
    telemetry::{get_subscriber, init_subscriber},
};
use tempfile::NamedTempFile;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "debug";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialize tracing");
    }
});

pub const HEADER: &str = "name;email;type;price;total_money;start_date;end_date;level_name";

pub struct Row {
    pub name: String,
    pub kind: &'static str,
    pub price: String,
    pub total_money: String,
    pub end_date: String,
}

impl Row {
    /// An ongoing paid subscription with a random subscriber.
    pub fn active(price: &str, total_money: &str) -> Self {
        Self {
            name: Name().fake(),
            kind: "subscription",
            price: price.into(),
            total_money: total_money.into(),
            end_date: "-".into(),
        }
    }

    pub fn named(self, name: &str) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn ended(self, end_date: &str) -> Self {
        Self {
            end_date: end_date.into(),
            ..self
        }
    }

    fn to_line(&self) -> String {
        let email: String = SafeEmail().fake();
        format!(
            "\"{}\";{email};{};{};{};2023-07-10;{};Tier",
            self.name, self.kind, self.price, self.total_money, self.end_date
        )
    }
}

pub struct TestExport {
    content: String,
}

impl TestExport {
    pub fn new(rows: &[Row]) -> Self {
        Lazy::force(&TRACING);

        let mut content = format!("\u{feff}{HEADER}\n");
        for row in rows {
            content.push_str(&row.to_line());
            content.push('\n');
        }
        Self { content }
    }

    pub fn raw(content: &str) -> Self {
        Lazy::force(&TRACING);

        Self {
            content: content.into(),
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.content.clone().into_bytes()
    }

    pub fn write_to_file(&self) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create a temporary export");
        file.write_all(self.content.as_bytes())
            .expect("Failed to write the temporary export");
        file
    }

    pub fn load(&self) -> SubscriberList {
        CsvSource::from_bytes(self.bytes())
            .parse()
            .expect("Failed to parse the export")
    }
}

pub fn names(list: &SubscriberList, price: f64) -> Vec<String> {
    list.select_by_price(price)
        .into_iter()
        .map(|subscriber| subscriber.name().to_string())
        .collect()
}
