// templates/pages/shoe.rs

use crate::domain::{Shoe, Variant};
use crate::templates::{components::shoe_card, desktop_layout};
use crate::theme::Theme;
use maud::html;
use maud::Markup;

pub fn shoe_page(shoe: &Shoe, variant: Variant, theme: &Theme) -> Markup {
    desktop_layout(
        &shoe.name,
        theme,
        html! {
            p {
                a href="/" style=(format!("color: {};", theme.colors.gray_700)) { "← Back to all shoes" }
            }
            section
                class="shoe-detail"
                style=(format!("max-width: 560px; padding: 24px; background: {}; border-radius: 16px;", theme.colors.gray_100))
            {
                (shoe_card(shoe, variant, theme))
            }
        },
    )
}
