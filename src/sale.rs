//! Sale records, read-only from the client core's point of view
use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn new_with(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for TimeStamp<Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        e.i64(self.0.timestamp())?.ok()
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let secs = d.i64()?;

        DateTime::from_timestamp(secs, 0)
            .map(TimeStamp)
            .ok_or(minicbor::decode::Error::message(
                "failed to convert timestamp to utc",
            ))
    }
}

/// A delivery note issued to a client.
///
/// Only read by the client core: to block deletion of clients with sales and
/// to add unpaid credit sales to the client's debt.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq)]
pub struct Sale {
    #[n(0)]
    pub document_number: u64,
    #[n(1)]
    pub product_code: String,
    #[n(2)]
    pub description: String,
    #[n(3)]
    pub trays: u32,
    #[n(4)]
    pub net_kilos: f64,
    #[n(5)]
    pub sale_date: TimeStamp<Utc>,
    #[n(6)]
    pub paid_on_credit: bool,
    #[n(7)]
    pub rut: String, // owning client
    #[n(8)]
    pub total: f64,
}

impl Sale {
    pub fn new(document_number: u64, rut: impl Into<String>, total: f64) -> Self {
        Self {
            document_number,
            product_code: String::new(),
            description: String::new(),
            trays: 0,
            net_kilos: 0.0,
            sale_date: TimeStamp::new(),
            paid_on_credit: false,
            rut: rut.into(),
            total,
        }
    }
    pub fn set_product(mut self, code: impl Into<String>, description: impl Into<String>) -> Self {
        self.product_code = code.into();
        self.description = description.into();
        self
    }
    pub fn set_trays(mut self, trays: u32) -> Self {
        self.trays = trays;
        self
    }
    pub fn set_net_kilos(mut self, kilos: f64) -> Self {
        self.net_kilos = kilos;
        self
    }
    pub fn set_sale_date(mut self, date: TimeStamp<Utc>) -> Self {
        self.sale_date = date;
        self
    }
    pub fn on_credit(mut self) -> Self {
        self.paid_on_credit = true;
        self
    }
}
