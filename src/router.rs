use crate::catalog::{Catalog, SortBy};
use crate::config::AppConfig;
use crate::domain::Variant;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use crate::theme::THEME;
use astra::Request;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub fn handle(req: Request, catalog: &Catalog, cfg: &AppConfig) -> ResultResp {
    handle_at(req, catalog, cfg, Utc::now())
}

/// Same as [`handle`] with an explicit clock, so "new release" is reproducible.
pub fn handle_at(req: Request, catalog: &Catalog, cfg: &AppConfig, now: DateTime<Utc>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let params = parse_query(&req);
            let sort = match params.get("sort") {
                None => SortBy::Newest,
                Some(raw) => SortBy::parse(raw)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown sort order: {raw}")))?,
            };

            let shoes = catalog.sorted(sort);
            html_response(templates::pages::catalog_page(
                &shoes,
                sort,
                now,
                cfg.new_release_window(),
                &THEME,
            ))
        }
        ("GET", path) => match path.strip_prefix("/shoe/") {
            Some(slug) if !slug.is_empty() => {
                let shoe = catalog.find(slug).ok_or(ServerError::NotFound)?;
                let variant = Variant::for_shoe(shoe, now, cfg.new_release_window());
                html_response(templates::pages::shoe_page(shoe, variant, &THEME))
            }
            _ => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
