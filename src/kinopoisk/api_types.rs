use serde::Deserialize;

/// Film card from `GET /v2.2/films/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDetails {
    pub name_ru: Option<String>,
    pub name_original: Option<String>,
    pub year: Option<i64>,
    #[serde(default)]
    pub genres: Vec<GenreItem>,
    #[serde(default)]
    pub countries: Vec<CountryItem>,
    pub rating_imdb: Option<f64>,
    pub rating_kinopoisk: Option<f64>,
    pub rating_kinopoisk_vote_count: Option<i64>,
    pub description: Option<String>,
    /// Runtime in minutes.
    pub film_length: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreItem {
    pub genre: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountryItem {
    pub country: Option<String>,
}

/// One entry of the `GET /v1/staff?filmId={id}` top-level array.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffItem {
    pub staff_id: Option<i64>,
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub profession_text: Option<String>,
    pub profession: Option<String>,
}

/// Response of `GET /v2.2/films/{id}/box_office`.
#[derive(Debug, Default, Deserialize)]
pub struct BoxOfficeResponse {
    #[serde(default)]
    pub items: Vec<BoxOfficeItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxOfficeItem {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<i64>,
    pub currency_code: Option<String>,
}

/// Response of `GET /v2.2/films/{id}/distributions`.
#[derive(Debug, Default, Deserialize)]
pub struct DistributionResponse {
    #[serde(default)]
    pub items: Vec<DistributionItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionItem {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
    pub country: Option<CountryItem>,
}
