use once_cell::sync::Lazy;
use reqwest::Url;

pub static API_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://puddle.farm/api/").unwrap());
