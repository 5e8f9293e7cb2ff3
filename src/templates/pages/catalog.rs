// templates/pages/catalog.rs

use crate::catalog::SortBy;
use crate::domain::{Shoe, Variant};
use crate::templates::{components::shoe_card, desktop_layout};
use crate::theme::Theme;
use chrono::{DateTime, TimeDelta, Utc};
use maud::{html, Markup};

const SORT_OPTIONS: &[(SortBy, &str)] = &[(SortBy::Newest, "Newest Releases"), (SortBy::Price, "Price")];

pub fn catalog_page(
    shoes: &[&Shoe],
    sort: SortBy,
    now: DateTime<Utc>,
    window: TimeDelta,
    theme: &Theme,
) -> Markup {
    desktop_layout(
        "Running",
        theme,
        html! {
            div style="display: flex; justify-content: space-between; align-items: baseline;" {
                h2 style=(format!("font-weight: {};", theme.weights.medium)) { "Running" }
                form method="get" action="/" {
                    label for="sort" style=(format!("color: {}; margin-right: 16px;", theme.colors.gray_700)) { "Sort" }
                    select name="sort" id="sort" onchange="this.form.submit()" {
                        @for (option, label) in SORT_OPTIONS {
                            option value=(option.as_str()) selected[*option == sort] { (label) }
                        }
                    }
                    noscript { button type="submit" { "Apply" } }
                }
            }

            @if shoes.is_empty() {
                p style=(format!("color: {};", theme.colors.gray_500)) { "No shoes in the catalog yet." }
            } @else {
                div
                    class="shoe-grid"
                    style="display: flex; flex-wrap: wrap; gap: 32px;"
                {
                    @for shoe in shoes {
                        div style="flex: 1 1 275px; max-width: 340px;" {
                            (shoe_card(shoe, Variant::for_shoe(shoe, now, window), theme))
                        }
                    }
                }
            }
        },
    )
}
