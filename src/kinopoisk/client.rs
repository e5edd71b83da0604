use std::time::Duration;

use tracing::warn;

use crate::kinopoisk::{
    Fetched, HttpClient,
    api_types::{
        BoxOfficeItem, BoxOfficeResponse, DistributionItem, DistributionResponse, FilmDetails,
        StaffItem,
    },
};
use crate::record::{BoxOfficeFacts, CastEntry, PLACEHOLDER, PremiereFacts, format::format_date};

/// Professions excluded from the cast list. Matching is a substring test
/// over the lowercased profession text.
const EXCLUDED_PROFESSIONS: [&str; 2] = ["монтажер", "художник"];

/// Currency display symbols; unknown codes pass through unchanged.
const CURRENCY_SYMBOLS: [(&str, &str); 10] = [
    ("USD", "$"),
    ("RUB", "₽"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("CNY", "¥"),
    ("JPY", "¥"),
    ("KZT", "₸"),
    ("UAH", "₴"),
    ("BYN", "Br"),
    ("INR", "₹"),
];

/// Client for the four film endpoints.
#[derive(Clone)]
pub struct KinopoiskClient {
    http: HttpClient,
}

impl KinopoiskClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: HttpClient::new(base_url, timeout),
        }
    }

    /// Fetch the main film card.
    ///
    /// The only call that surfaces a failure message: without the film card
    /// the whole fetch is aborted.
    pub async fn film_details(
        &self,
        film_id: u64,
        api_key: &str,
    ) -> std::result::Result<FilmDetails, String> {
        let endpoint = format!("/v2.2/films/{film_id}");
        match self.http.get::<FilmDetails>(&endpoint, api_key).await {
            Ok(details) => Ok(details),
            Err(e) => {
                warn!("Film details request failed for {film_id}: {e}");
                Err(e.to_string())
            }
        }
    }

    /// Fetch the cast list, filtered and name-resolved.
    pub async fn film_cast(&self, film_id: u64, api_key: &str) -> Fetched<Vec<CastEntry>> {
        let endpoint = format!("/v1/staff?filmId={film_id}");
        match self.http.get::<Vec<StaffItem>>(&endpoint, api_key).await {
            Ok(items) => Fetched::Data(cast_from_staff(items)),
            Err(e) => {
                warn!("Staff request failed for {film_id}: {e}");
                Fetched::Unavailable
            }
        }
    }

    /// Fetch box-office figures bucketed into the five fixed slots.
    pub async fn film_box_office(&self, film_id: u64, api_key: &str) -> Fetched<BoxOfficeFacts> {
        let endpoint = format!("/v2.2/films/{film_id}/box_office");
        match self.http.get::<BoxOfficeResponse>(&endpoint, api_key).await {
            Ok(response) => Fetched::Data(box_office_from_items(response.items)),
            Err(e) => {
                warn!("Box office request failed for {film_id}: {e}");
                Fetched::Unavailable
            }
        }
    }

    /// Fetch premiere dates from the distributions list.
    pub async fn film_premieres(&self, film_id: u64, api_key: &str) -> Fetched<PremiereFacts> {
        let endpoint = format!("/v2.2/films/{film_id}/distributions");
        match self
            .http
            .get::<DistributionResponse>(&endpoint, api_key)
            .await
        {
            Ok(response) => Fetched::Data(premieres_from_items(response.items)),
            Err(e) => {
                warn!("Distributions request failed for {film_id}: {e}");
                Fetched::Unavailable
            }
        }
    }
}

/// Filter and convert raw staff entries into cast entries.
///
/// Profession text prefers `professionText` over `profession`; entries
/// whose lowercased text contains an excluded keyword are dropped for good.
pub(crate) fn cast_from_staff(items: Vec<StaffItem>) -> Vec<CastEntry> {
    let mut cast = Vec::with_capacity(items.len());
    for item in items {
        let profession = item
            .profession_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(item.profession.as_deref())
            .unwrap_or_default()
            .to_lowercase();

        if EXCLUDED_PROFESSIONS
            .iter()
            .any(|excluded| profession.contains(excluded))
        {
            continue;
        }

        let name = item
            .name_ru
            .filter(|name| !name.is_empty())
            .or(item.name_en.filter(|name| !name.is_empty()))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        cast.push(CastEntry {
            name,
            staff_id: item.staff_id.filter(|&id| id != 0).map(|id| id.to_string()),
        });
    }
    cast
}

/// Bucket raw box-office items into the five fixed slots. Later items of
/// the same type overwrite earlier ones.
pub(crate) fn box_office_from_items(items: Vec<BoxOfficeItem>) -> BoxOfficeFacts {
    let mut facts = BoxOfficeFacts::default();
    for item in items {
        let currency = item.currency_code.unwrap_or_else(|| "USD".to_string());
        let value = match item.amount {
            Some(amount) if amount != 0 => format!("{amount} {}", currency_symbol(&currency)),
            _ => PLACEHOLDER.to_string(),
        };

        match item.kind.as_deref() {
            Some("BUDGET") => facts.budget = Some(value),
            Some("WORLD") => facts.world = Some(value),
            Some("RUS") => facts.russia = Some(value),
            Some("USA") => facts.usa = Some(value),
            Some("MARKETING") => facts.marketing = Some(value),
            _ => {}
        }
    }
    facts
}

fn currency_symbol(code: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |(_, symbol)| symbol)
}

/// Scan distribution items for premiere dates. Both slots overwrite on
/// every match, so the last matching item wins.
pub(crate) fn premieres_from_items(items: Vec<DistributionItem>) -> PremiereFacts {
    let mut facts = PremiereFacts::default();
    for item in items {
        let kind = item.kind.unwrap_or_default().to_uppercase();
        let date = item.date.unwrap_or_else(|| PLACEHOLDER.to_string());

        if kind == "WORLD_PREMIER" {
            facts.world = format_date(&date);
        }
        if kind == "COUNTRY_SPECIFIC" {
            if let Some(country) = item.country.and_then(|c| c.country) {
                let country = country.to_lowercase();
                if country == "россия" || country == "russia" {
                    facts.russia = format_date(&date);
                }
            }
        }
    }
    facts
}
