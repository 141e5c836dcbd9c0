/// Failure to turn one raw export row into a [`Subscriber`](super::Subscriber).
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("`{field}` is missing or is not a YYYY-MM-DD date: `{value}`")]
    MalformedDate { field: &'static str, value: String },
    #[error("`{field}` is not a valid amount: `{value}`")]
    MalformedAmount { field: &'static str, value: String },
}
